//! Hotel identity, contact channels and location content.

/// Contact and branding details shared by header, footer, map and dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HotelInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub footer_blurb: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    /// International number without `+`, as `wa.me` expects it.
    pub whatsapp_number: &'static str,
    pub hero_image: &'static str,
    pub map_embed_url: &'static str,
    pub maps_link: &'static str,
    pub copyright_year: u16,
}

pub static HOTEL: HotelInfo = HotelInfo {
    name: "Hotel El Marquez",
    tagline: "Elegancia colonial en el corazón de Ecuador. Donde la tradición se encuentra con el lujo moderno.",
    footer_blurb: "Tu hogar en la Amazonía ecuatoriana. Donde la aventura se encuentra con el confort.",
    address: "Av. Alejandro Labaka y Camilo de Torrano",
    city: "El Coca, Orellana",
    phone_display: "+593 6 288-0127",
    phone_href: "tel:+59362880127",
    email: "info@hotelelmarquez.com",
    whatsapp_number: "593962880127",
    hero_image: "https://images.unsplash.com/photo-1564501049412-61c2a3083791?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80",
    map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3979.123456789!2d-76.99876543210987!3d-0.4654321098765432!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMMKwMjcnNTUuNiJTIDc2wrA1OSc1NS41Ilc!5e0!3m2!1ses!2sec!4v1234567890123",
    maps_link: "https://maps.google.com/?q=El+Coca+Orellana+Ecuador",
    copyright_year: 2024,
};

impl HotelInfo {
    /// Full postal line as shown in the contact section.
    pub fn full_address(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// "How to get here" entry in the map section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TravelTip {
    pub title: &'static str,
    pub description: &'static str,
}

pub static TRAVEL_TIPS: &[TravelTip] = &[
    TravelTip {
        title: "Desde el Aeropuerto",
        description: "15 minutos en taxi desde el Aeropuerto Francisco de Orellana",
    },
    TravelTip {
        title: "Desde Quito",
        description: "45 minutos en vuelo o 5 horas por carretera",
    },
    TravelTip {
        title: "Ubicación Central",
        description: "En el corazón de El Coca, cerca de todas las atracciones",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attraction {
    pub name: &'static str,
    pub distance: &'static str,
    pub kind: &'static str,
}

pub static NEARBY_ATTRACTIONS: &[Attraction] = &[
    Attraction { name: "Parque Nacional Yasuní", distance: "2 horas", kind: "Naturaleza" },
    Attraction { name: "Río Napo", distance: "5 minutos", kind: "Recreación" },
    Attraction { name: "Centro de El Coca", distance: "Caminando", kind: "Comercial" },
    Attraction { name: "Comunidades Indígenas", distance: "30 minutos", kind: "Cultural" },
];

/// Services listed in the footer and the header services dropdown.
pub static SERVICES: &[&str] = &[
    "WiFi Gratuito",
    "Transporte",
    "Restaurante Amazónico",
    "Tours Amazónicos",
    "Servicios de Spa",
];
