//! Room catalog shown by the carousel, detail modal and reservation form.
//!
//! Rooms are descriptive records only; there is no availability or
//! inventory behind them.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

/// One amenity line: an icon tag plus its display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Amenity {
    pub icon: &'static str,
    pub name: &'static str,
}

/// A room type offered by the hotel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    pub id: u32,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub gallery: &'static [&'static str],
    /// Nightly rate in whole US dollars.
    pub price: u32,
    /// Strike-through rate, when the room is on offer.
    pub original_price: Option<u32>,
    pub capacity: u32,
    pub size: &'static str,
    pub view: &'static str,
    pub rating: f32,
    pub amenities: &'static [Amenity],
    pub features: &'static [&'static str],
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

impl Room {
    /// Image at `index` in the room gallery, falling back to the cover image.
    pub fn gallery_image(&self, index: usize) -> &'static str {
        self.gallery.get(index).copied().unwrap_or(self.image)
    }

    /// Number of whole stars to draw for the rating.
    pub fn full_stars(&self) -> usize {
        // Ratings are bounded to 0..=5, so the cast cannot truncate meaningfully.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stars = self.rating.clamp(0.0, 5.0).floor() as usize;
        stars
    }

    pub fn rating_label(&self) -> String {
        format!("{}", self.rating)
    }

    /// Per-night discount against the original rate, zero when not on offer.
    pub fn nightly_discount(&self) -> u32 {
        self.original_price
            .map_or(0, |original| original.saturating_sub(self.price))
    }
}

/// Look up a room by its catalog id.
pub fn room_by_id(id: u32) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.id == id)
}

pub static ROOMS: &[Room] = &[
    Room {
        id: 1,
        name: "Habitación Estándar",
        subtitle: "Comodidad Esencial",
        image: "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1595576508898-0ad5c879a061?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        price: 85,
        original_price: Some(95),
        capacity: 2,
        size: "25 m²",
        view: "Vista a los jardines",
        rating: 4.8,
        amenities: &[
            Amenity { icon: "wifi", name: "WiFi gratuito" },
            Amenity { icon: "tv", name: "TV cable HD" },
            Amenity { icon: "ac", name: "Aire acondicionado" },
            Amenity { icon: "bath", name: "Baño privado" },
            Amenity { icon: "safe", name: "Caja fuerte" },
            Amenity { icon: "coffee", name: "Cafetera" },
        ],
        features: &["Cama King", "Escritorio", "Mini refrigerador", "Balcón privado"],
        description: "Habitación elegante con todas las comodidades modernas. Perfecta para viajeros que buscan confort y funcionalidad en un ambiente acogedor.",
        highlights: &["Renovada recientemente", "Vista a jardines tropicales", "Desayuno incluido"],
    },
    Room {
        id: 2,
        name: "Habitación Superior",
        subtitle: "Elegancia Amazónica",
        image: "https://images.unsplash.com/photo-1596394516093-501ba68a0ba6?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1596394516093-501ba68a0ba6?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1578683010236-d716f9a3f461?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1590490360182-c33d57733427?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        price: 120,
        original_price: Some(140),
        capacity: 3,
        size: "35 m²",
        view: "Vista parcial al río Napo",
        rating: 4.9,
        amenities: &[
            Amenity { icon: "wifi", name: "WiFi gratuito" },
            Amenity { icon: "tv", name: "Smart TV 55''" },
            Amenity { icon: "ac", name: "Climatización dual" },
            Amenity { icon: "minibar", name: "Minibar premium" },
            Amenity { icon: "river", name: "Vista al río" },
            Amenity { icon: "jacuzzi", name: "Bañera de hidromasaje" },
        ],
        features: &["Cama King + Sofá cama", "Área de estar", "Terraza privada", "Amenidades de lujo"],
        description: "Habitación espaciosa con vista parcial al majestuoso río Napo. Diseñada para brindar una experiencia superior con toques amazónicos únicos.",
        highlights: &["Vista al río Napo", "Terraza con hamaca", "Amenidades premium"],
    },
    Room {
        id: 3,
        name: "Suite Junior",
        subtitle: "Lujo Tropical",
        image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1591088398332-8a7791972843?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        price: 180,
        original_price: Some(210),
        capacity: 4,
        size: "50 m²",
        view: "Vista panorámica al río",
        rating: 5.0,
        amenities: &[
            Amenity { icon: "wifi", name: "WiFi premium" },
            Amenity { icon: "tv", name: "Smart TV 65''" },
            Amenity { icon: "ac", name: "Climatización inteligente" },
            Amenity { icon: "minibar", name: "Minibar gourmet" },
            Amenity { icon: "living", name: "Sala de estar" },
            Amenity { icon: "spa", name: "Kit de spa privado" },
        ],
        features: &["Suite dos ambientes", "Sala de estar independiente", "Terraza panorámica", "Servicio de mayordomo"],
        description: "Suite elegante con sala de estar separada y vista panorámica al río Napo. El refugio perfecto para familias que buscan lujo y comodidad absoluta.",
        highlights: &["Vista panorámica 180°", "Servicio de mayordomo", "Kit de bienvenida gourmet"],
    },
    Room {
        id: 4,
        name: "Suite Presidencial",
        subtitle: "Experiencia Exclusiva",
        image: "https://images.unsplash.com/photo-1566665797739-1674de7a421a?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1566665797739-1674de7a421a?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1520637736862-4d197d17c90a?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        price: 280,
        original_price: Some(320),
        capacity: 6,
        size: "75 m²",
        view: "Vista panorámica 360°",
        rating: 5.0,
        amenities: &[
            Amenity { icon: "wifi", name: "WiFi ultra-rápido" },
            Amenity { icon: "entertainment", name: "Sistema de entretenimiento" },
            Amenity { icon: "ac", name: "Control climático premium" },
            Amenity { icon: "kitchen", name: "Kitchenette" },
            Amenity { icon: "jacuzzi", name: "Jacuzzi privado" },
            Amenity { icon: "concierge", name: "Servicio de concierge 24/7" },
        ],
        features: &["Suite tres ambientes", "Comedor privado", "Jacuzzi en terraza", "Acceso VIP"],
        description: "La suite más exclusiva del hotel con vistas panorámicas de 360° y servicios premium. Una experiencia única en el corazón de la Amazonía.",
        highlights: &["Acceso VIP", "Jacuzzi panorámico", "Chef privado disponible"],
    },
];
