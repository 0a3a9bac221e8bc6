//! Photo gallery content.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
}

pub static GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage {
        src: "https://images.unsplash.com/photo-1531982535417-a39d136cca87?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        alt: "Piscina de lujo del hotel con agua cristalina",
        title: "Piscina Principal",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1572803089768-1b990231961a?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        alt: "Restaurante elegante con ambiente gourmet",
        title: "Restaurante Amazónico",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1566665797739-1674de7a421a?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        alt: "Lobby elegante con decoración moderna",
        title: "Lobby Principal",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        alt: "Terraza con vista panorámica",
        title: "Terraza Mirador",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1571896349842-33c89424de2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        alt: "Bar del hotel con ambiente acogedor",
        title: "Bar Lounge",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1520637836862-4d197d17c90a?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        alt: "Jardines tropicales del hotel",
        title: "Jardines Tropicales",
    },
];
