// ── Built-in content ──
//
// Everything the app falls back to when the feeds are unreachable, plus the
// placeholder copy shown for missing listing fields.

use chrono::NaiveDate;

use crate::model::{Banner, Coordinates, DynamicContent, Feature, Hero, Landlord, Property};

// ── Location ─────────────────────────────────────────────────────────

/// Geographic centre of Nigeria.
pub const LOCATION: Coordinates = Coordinates {
    lat: 9.081_999,
    lng: 8.675_277,
};

// ── Profile ──────────────────────────────────────────────────────────

pub const PROFILE_NAME: &str = "Me";
pub const PROFILE_EMAIL: &str = "Me@email.com";
pub const PROFILE_PHONE: &str = "+234 801 234 5678";
pub const PROFILE_ADDRESS: &str = "Off K, UNILAG, Lagos";
pub const PROFILE_MEMBER_SINCE: &str = "2026";

pub const BOOKING_TOTAL: u64 = 1_500;

// ── Listing placeholders ─────────────────────────────────────────────

pub const LANDLORD_NAME: &str = "Property Manager";
pub const LANDLORD_CALL_NAME: &str = "Landlord";
pub const LANDLORD_PHONE: &str = "+234 800 123 4567";
pub const DESCRIPTION: &str = "Beautiful property in a great location. Close to public transportation, shopping, and dining.";
pub const LOCATION_TEXT: &str = "Location available";
pub const SCHOOL_TEXT: &str = "Near campus";
pub const SCHOOL_DETAIL_TEXT: &str = "Near area";
pub const DISTANCE_TEXT: &str = "Convenient location";
pub const BANNER_ICON: &str = "fa-home";

pub const SUPPORT_LINE: &str = "+234 800 PRIMER";
pub const SUPPORT_EMAIL: &str = "get.primer@proton.me";

/// Shown on the home page when no listing names a school.
pub const UNIVERSITY_CARDS: [(&str, usize); 2] = [
    ("Kaduna State University", 2),
    ("Gombe State University", 1),
];

// ── Dynamic content ──────────────────────────────────────────────────

pub const HERO_TITLE: &str = "Find Your Perfect Home in Nigeria";
pub const HERO_SUBTITLE: &str = "Discover verified apartments, houses, and student accommodations";

pub fn hero() -> Hero {
    Hero {
        title: HERO_TITLE.into(),
        subtitle: HERO_SUBTITLE.into(),
    }
}

pub fn banners() -> Vec<Banner> {
    vec![
        Banner {
            id: "1".into(),
            icon: "fa-home".into(),
            title: "Find Your Perfect Home".into(),
            description: "Browse apartments, houses, and student accommodations".into(),
        },
        Banner {
            id: "2".into(),
            icon: "fa-bolt".into(),
            title: "24/7 Electricity".into(),
            description: "Properties with guaranteed power".into(),
        },
    ]
}

pub fn dynamic_content() -> DynamicContent {
    DynamicContent {
        banners: banners(),
        hero: hero(),
    }
}

// ── Listings ─────────────────────────────────────────────────────────

fn features(items: &[(&str, &str)]) -> Vec<Feature> {
    items
        .iter()
        .map(|(icon, label)| Feature {
            icon: (*icon).into(),
            label: (*label).into(),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// The three-listing dataset used when the listings feed cannot be read.
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop1".into(),
            title: "Modern Studio Apartment".into(),
            location: Some("Near University Campus".into()),
            school: Some("Kaduna State University".into()),
            kind: Some("studio".into()),
            price: 120_000,
            price_display: Some("₦120,000/month".into()),
            bedrooms: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=500",
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=500",
            ]),
            features: features(&[
                ("bed", "1 Bed"),
                ("bath", "1 Bath"),
                ("wifi", "WiFi"),
                ("square", "45 m²"),
            ]),
            amenities: strings(&["Fully Furnished", "24/7 Security", "Study Area", "Laundry Room"]),
            landlord: Some(Landlord {
                name: Some("Mr. Adebayo".into()),
                phone: Some("+2348012345678".into()),
                rating: Some(4.8),
            }),
            coordinates: Some(Coordinates {
                lat: 6.5244,
                lng: 3.3792,
            }),
            distance: Some("0.5km from campus".into()),
            description: Some(
                "Modern studio apartment perfect for students or young professionals. Fully furnished with high-speed internet and secure access.".into(),
            ),
            added: Some(chrono::Local::now().date_naive()),
            is_new: true,
            is_popular: false,
            region: Some("south".into()),
        },
        Property {
            id: "prop2".into(),
            title: "3-Bedroom Family Home".into(),
            location: Some("GRA, Port Harcourt".into()),
            school: Some("University of Port Harcourt".into()),
            kind: Some("house".into()),
            price: 350_000,
            price_display: Some("₦350,000/month".into()),
            bedrooms: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=500",
                "https://images.unsplash.com/photo-1580587771525-78b9dba3b914?w=500",
            ]),
            features: features(&[
                ("bed", "3 Beds"),
                ("bath", "2 Baths"),
                ("car", "Parking"),
                ("square", "180 m²"),
            ]),
            amenities: strings(&["Gated Community", "24/7 Security", "Backup Generator", "Staff Quarters"]),
            landlord: Some(Landlord {
                name: Some("Chief Mrs. Eze".into()),
                phone: Some("+2348123456789".into()),
                rating: Some(4.9),
            }),
            coordinates: Some(Coordinates {
                lat: 4.8156,
                lng: 7.0498,
            }),
            distance: Some("3km from town".into()),
            description: Some(
                "Spacious family home in secure GRA neighborhood. Perfect for professionals or families.".into(),
            ),
            added: NaiveDate::from_ymd_opt(2025, 5, 15),
            is_new: true,
            is_popular: false,
            region: Some("south".into()),
        },
        Property {
            id: "prop_north1".into(),
            title: "Maitama Luxury Apartment".into(),
            location: Some("Maitama, Abuja".into()),
            school: Some("University of Abuja".into()),
            kind: Some("luxury_apartment".into()),
            price: 250_000,
            price_display: Some("₦250,000/month".into()),
            bedrooms: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1560448204-603b3fc33ddc?w=500",
                "https://images.unsplash.com/photo-1512918728675-ed5a9ecdebfd?w=500",
            ]),
            features: features(&[
                ("bed", "3 Beds"),
                ("bath", "2 Baths"),
                ("wifi", "High-speed WiFi"),
                ("square", "120 m²"),
            ]),
            amenities: strings(&["Swimming Pool", "24/7 Security", "Gym", "Parking", "Generator"]),
            landlord: Some(Landlord {
                name: Some("Alhaji Sani".into()),
                phone: Some("+2348098765432".into()),
                rating: Some(4.9),
            }),
            coordinates: Some(Coordinates {
                lat: 9.0765,
                lng: 7.3986,
            }),
            distance: Some("5km from University of Abuja".into()),
            description: Some(
                "Luxury apartment in prestigious Maitama district. Fully furnished with modern amenities and excellent security.".into(),
            ),
            added: NaiveDate::from_ymd_opt(2025, 5, 23),
            is_new: true,
            is_popular: false,
            region: Some("north".into()),
        },
    ]
}
