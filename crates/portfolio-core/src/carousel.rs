use serde::Serialize;

/// One entry in the services carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub rate: &'static str,
}

/// The fixed service catalog shown by the carousel.
pub const PRODUCTS: [Product; 3] = [
    Product {
        name: "Web Development",
        image: "assets/webdevelopment.jpeg",
        description: "Building responsive, accessible, and visually stunning websites using modern technologies.",
        rate: "$75/hr",
    },
    Product {
        name: "UI/UX Design",
        image: "assets/uxui.jpg",
        description: "Designing intuitive interfaces and engaging experiences that drive conversions.",
        rate: "$65/hr",
    },
    Product {
        name: "Consulting",
        image: "assets/consulting.jpg",
        description: "Offering expert advice and strategies to boost your digital presence.",
        rate: "$100/hr",
    },
];

/// Cursor over the product list, wrapping at both ends.
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn current(&self) -> &'static Product {
        &PRODUCTS[self.index]
    }

    pub fn next(&mut self) -> &'static Product {
        self.index = (self.index + 1) % PRODUCTS.len();
        self.current()
    }

    pub fn prev(&mut self) -> &'static Product {
        self.index = (self.index + PRODUCTS.len() - 1) % PRODUCTS.len();
        self.current()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        PRODUCTS.len()
    }

    pub fn is_empty(&self) -> bool {
        PRODUCTS.is_empty()
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}
