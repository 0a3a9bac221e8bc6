//! Guest reviews and the "why choose us" feature blurbs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    /// Whole stars, 1..=5.
    pub rating: u8,
    pub comment: &'static str,
    pub avatar: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "María González",
        location: "Quito, Ecuador",
        rating: 5,
        comment: "Excelente ubicación y servicio. Las habitaciones son muy cómodas y el personal extremadamente amable. Perfecto para explorar la Amazonía.",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150&q=80",
    },
    Testimonial {
        id: 2,
        name: "Carlos Rodríguez",
        location: "Guayaquil, Ecuador",
        rating: 5,
        comment: "Hotel muy recomendado. La comida del restaurante es deliciosa y la atención al cliente excepcional. Definitivamente regresaremos.",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150&q=80",
    },
    Testimonial {
        id: 3,
        name: "Ana Martínez",
        location: "Cuenca, Ecuador",
        rating: 5,
        comment: "Una experiencia maravillosa. El hotel está muy bien ubicado y las instalaciones son modernas y limpias. Ideal para turismo de naturaleza.",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150&q=80",
    },
];

/// Value-proposition card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HotelFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static HOTEL_FEATURES: &[HotelFeature] = &[
    HotelFeature {
        icon: "🛡",
        title: "Seguridad y Confort",
        description: "Instalaciones completamente renovadas con los más altos estándares de seguridad y protocolos sanitarios actualizados.",
    },
    HotelFeature {
        icon: "☕",
        title: "Gastronomía Tradicional",
        description: "Restaurante especializado en comida ecuatoriana e internacional, con ingredientes frescos de la región amazónica.",
    },
    HotelFeature {
        icon: "📍",
        title: "Ubicación Privilegiada",
        description: "En el corazón de El Coca, puerta de entrada a la Amazonía ecuatoriana y cerca de las principales atracciones naturales.",
    },
];
