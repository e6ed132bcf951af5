//! Static product catalog backing the product-details page, plus the shop
//! grid's filter and sort rules.

pub mod shop;

use chronea_types::ProductSnapshot;

pub const BRAND: &str = "CHRONÉA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDetail {
    pub id: &'static str,
    pub name: &'static str,
    pub cat: &'static str,
    pub model: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub movement: &'static str,
    pub case: &'static str,
    pub diameter: &'static str,
    pub water: &'static str,
    pub strap: &'static str,
    pub img: &'static str,
    pub story: &'static str,
}

impl ProductDetail {
    pub fn page_title(&self) -> String {
        format!("{} | {}", self.name, BRAND)
    }

    pub fn model_label(&self) -> String {
        format!("Model No. {}", self.model)
    }

    /// Technical rows in the order the details page lists them.
    pub fn specs(&self) -> [&'static str; 5] {
        [self.movement, self.case, self.diameter, self.water, self.strap]
    }

    pub fn snapshot(&self, link: &str) -> ProductSnapshot {
        ProductSnapshot {
            name: self.name.to_owned(),
            category: self.cat.to_owned(),
            price: self.price.to_owned(),
            image: self.img.to_owned(),
            link: link.to_owned(),
        }
    }
}

/// Look up a product by slug. No slug means `default_id`; an unknown slug
/// means nothing.
pub fn lookup_or(id: Option<&str>, default_id: &str) -> Option<&'static ProductDetail> {
    let id = match id {
        Some(id) if !id.is_empty() => id,
        _ => default_id,
    };
    PRODUCTS.iter().find(|p| p.id == id)
}

static PRODUCTS: &[ProductDetail] = &[
    ProductDetail {
        id: "gold-horizon",
        name: "Gold Horizon",
        cat: "Moonphase Collection",
        model: "REF-2026-GH",
        price: "Price on Request",
        description: "A masterpiece of horological engineering, the Gold Horizon features a hand-finished rose gold case and a precision moonphase complication.",
        movement: "Automatic Caliber 4040",
        case: "18k Rose Gold",
        diameter: "42 mm",
        water: "50 Meters",
        strap: "Alligator Leather",
        img: "https://images.pexels.com/photos/9203637/pexels-photo-9203637.jpeg",
        story: "Every Gold Horizon timepiece takes over 300 hours to assemble. Our master watchmakers in Geneva ensure that every gear, spring, and jewel is placed with absolute perfection.",
    },
    ProductDetail {
        id: "silver-chrono-ii",
        name: "Silver Chrono II",
        cat: "Chronograph Collection",
        model: "REF-2026-SC",
        price: "Price on Request",
        description: "The Silver Chrono II is designed for those who value precision and performance. Its sleek stainless steel design is perfect for any occasion.",
        movement: "Automatic Chronograph",
        case: "Stainless Steel",
        diameter: "40 mm",
        water: "100 Meters",
        strap: "Metal Bracelet",
        img: "images/watch-silver.png",
        story: "Born from the world of high-speed racing, the Silver Chrono II combines rugged durability with refined Swiss elegance.",
    },
    ProductDetail {
        id: "royal-emblem",
        name: "Royal Emblem",
        cat: "Heritage Series",
        model: "REF-2026-RE",
        price: "Price on Request",
        description: "An icon of timeless design, the Royal Emblem represents the pinnacle of CHRONÉA heritage and traditional watchmaking.",
        movement: "Manual Wind Caliber 1924",
        case: "18k Yellow Gold",
        diameter: "38 mm",
        water: "30 Meters",
        strap: "Calfskin Leather",
        img: "images/watch-gold.png",
        story: "Inspired by our first creation in 1924, the Royal Emblem is a tribute to a century of uncompromising quality.",
    },
    ProductDetail {
        id: "aviator-x",
        name: "Aviator X",
        cat: "Pilot Collection",
        model: "REF-2025-AX",
        price: "Price on Request",
        description: "Engineered for the skies, the Aviator X features high visibility and extreme precision in a durable titanium shell.",
        movement: "Quartz High-Precision",
        case: "Titanium",
        diameter: "44 mm",
        water: "100 Meters",
        strap: "Nylon Tech Strap",
        img: "https://images.pexels.com/photos/3083461/pexels-photo-3083461.jpeg",
        story: "The Aviator X was developed in collaboration with elite pilots to ensure maximum reliability in the most demanding environments.",
    },
    ProductDetail {
        id: "celestial-rose",
        name: "Celestial Rose",
        cat: "Moonphase Series",
        model: "REF-2026-CR",
        price: "Price on Request",
        description: "Graceful and evocative, the Celestial Rose captures the beauty of the night sky on your wrist.",
        movement: "Automatic Caliber 3030",
        case: "18k Rose Gold",
        diameter: "36 mm",
        water: "30 Meters",
        strap: "Satin Silk Strap",
        img: "https://images.pexels.com/photos/30639797/pexels-photo-30639797.jpeg",
        story: "A tribute to the stars, each Celestial Rose features a unique mother-of-pearl dial and hand-set diamonds.",
    },
    ProductDetail {
        id: "deep-dive-pro",
        name: "Deep Dive Pro",
        cat: "Diver Collection",
        model: "REF-2025-DD",
        price: "Price on Request",
        description: "The ultimate tool for the modern explorer, built to withstand the pressures of the deep ocean.",
        movement: "Automatic Caliber 5050",
        case: "Brushed Titanium",
        diameter: "45 mm",
        water: "300 Meters",
        strap: "Rubber Dive Strap",
        img: "https://images.pexels.com/photos/11106320/pexels-photo-11106320.jpeg",
        story: "Tested in the deepest reaches of the Mediterranean, the Deep Dive Pro is more than a watch. It is vital equipment.",
    },
    ProductDetail {
        id: "pearl-essence",
        name: "Pearl Essence",
        cat: "Jewelry Series",
        model: "REF-2026-PE",
        price: "Price on Request",
        description: "Where fine jewelry meets master horology. A delicate timepiece for the most formal occasions.",
        movement: "Ultra-Thin Quartz",
        case: "Platinum",
        diameter: "32 mm",
        water: "Splashes Only",
        strap: "Diamond-Set Bracelet",
        img: "https://images.pexels.com/photos/12215971/pexels-photo-12215971.jpeg",
        story: "The Pearl Essence takes over 500 hours of jewel-setting alone, ensuring every diamond catches the light perfectly.",
    },
    ProductDetail {
        id: "grand-master",
        name: "Grand Master",
        cat: "Complication Collection",
        model: "REF-2025-GM",
        price: "Price on Request",
        description: "Our most complex movement yet, featuring a perpetual calendar and minute repeater.",
        movement: "Manual Wind Complication",
        case: "18k White Gold",
        diameter: "43 mm",
        water: "50 Meters",
        strap: "Croc-Embossed Leather",
        img: "https://images.pexels.com/photos/3766111/pexels-photo-3766111.jpeg",
        story: "The Grand Master represents the summit of our watchmakers' skill, containing over 800 individual components.",
    },
    ProductDetail {
        id: "speedster-gt",
        name: "Speedster GT",
        cat: "Racing Series",
        model: "REF-2025-GT",
        price: "Price on Request",
        description: "High-tech materials and high-speed design come together in this lightweight carbon fiber chronograph.",
        movement: "Automatic Chronograph 9000",
        case: "Carbon Fiber",
        diameter: "44 mm",
        water: "50 Meters",
        strap: "Perforated Racing Leather",
        img: "https://images.pexels.com/photos/10478973/pexels-photo-10478973.jpeg",
        story: "The Speedster GT uses actual carbon fiber from Formula 1 chassis, making it one of the lightest chronographs in the world.",
    },
];
