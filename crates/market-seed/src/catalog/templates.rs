//! Built-in product templates and price ranges.

use std::collections::BTreeMap;

use super::{Category, CategoryConfig, PriceRange, ProductTemplate};

const ELECTRONICS: &[(&str, &str)] = &[
    (
        "iPhone 15 Pro Max 256GB",
        "Battery health 98%, never opened or repaired, always used with a case and screen protector. Shipping or meetup both fine.",
    ),
    (
        "MacBook Air M2 16GB 512GB",
        "Used for coding through university and kept in great shape. Comes with the original charger and a sleeve.",
    ),
    (
        "Sony WH-1000XM5 noise-cancelling headphones",
        "Bought for business trips, used fewer than ten times. Mint condition, sound is flawless.",
    ),
    (
        "DJI Mini 3 Pro drone",
        "Flown twice and then left on a shelf. Includes the Fly More kit and carrying bag.",
    ),
    (
        "Nintendo Switch OLED",
        "Barely played, 99% new. Two game cartridges included, no joy-con drift, screen is perfect.",
    ),
    (
        "Logitech MX Master 3S wireless mouse",
        "Replaced during an office upgrade. Clicks are perfect and the battery lasts ages. Receiver included.",
    ),
    (
        "Kindle Paperwhite 5 Signature Edition",
        "Practically new, no scratches on the screen. Bought to read more, ended up on my phone anyway.",
    ),
    (
        "Apple Watch Series 9 45mm",
        "Cellular model, worn for a few months. Selling because I switched to Android. No dents on the case.",
    ),
];

const BOOKS: &[(&str, &str)] = &[
    (
        "Graduate entrance math review set with exercises",
        "Passed down by a senior who got in. Fewer than twenty pages done, nearly new.",
    ),
    (
        "Computer Systems: A Programmer's Perspective (CSAPP)",
        "A proper brick of a book, only the first three chapters read. Great for CS students.",
    ),
    (
        "The Three-Body Problem trilogy, hardcover",
        "Shrink wrap is off but only the first book was read. No folded pages, spine intact.",
    ),
    (
        "New Concept English, books 1-4",
        "Meant to study English properly and never started. Selling the full set cheap, good for beginners.",
    ),
    (
        "Sapiens + Homo Deus box set",
        "Got halfway and stalled, passing it on. Dust jackets included, well looked after.",
    ),
    (
        "The Pragmatic Programmer, 20th anniversary edition",
        "Read once, a few pencil notes in chapter two. Otherwise clean.",
    ),
];

const FURNITURE: &[(&str, &str)] = &[
    (
        "IKEA solid wood desk 120x60cm",
        "Graduation clear-out. Sturdy, some normal wear marks on the top. Pickup only.",
    ),
    (
        "Ergonomic gaming chair",
        "Seat cushion still springs back, mesh back breathes well. Height and armrests adjust fine.",
    ),
    (
        "Single folding sofa bed",
        "Bought for friends staying over, used as a sofa otherwise. Looks new, cheap for pickup.",
    ),
    (
        "Four-tier fabric wardrobe rack",
        "Easy to assemble, perfect for a rental while you settle in.",
    ),
    (
        "Nordic round floor lamp",
        "Soft light with a remote and adjustable color temperature. Makes the living room cozy.",
    ),
];

const CLOTHING: &[(&str, &str)] = &[
    (
        "Nike Air Force 1 triple white, EU 42",
        "Classic pair, worn about a month and cleaned regularly. No visible sole wear.",
    ),
    (
        "The North Face 1996 Nuptse jacket",
        "Size L, black. Keeps out wind and rain. Clearing out the closet.",
    ),
    (
        "Uniqlo U cotton T-shirt, size M",
        "Never tried on, tags still attached. Bought a duplicate color by mistake. Brand new.",
    ),
    (
        "Arc'teryx fleece jacket",
        "Authentic, very warm. About 90% new, no pilling or pulled threads.",
    ),
    (
        "Zara casual blazer, size S",
        "Worn once to an interview, slim fit. Navy blue.",
    ),
];

const BEAUTY: &[(&str, &str)] = &[
    (
        "Estee Lauder Advanced Night Repair serum 50ml",
        "Bought duty free, box and seal intact. Expires end of next year, overstocked.",
    ),
    (
        "SK-II Facial Treatment Essence 230ml",
        "About a fifth used, didn't suit my skin. Priced low.",
    ),
    (
        "Dior Rouge 999 matte lipstick",
        "Swatched once, wrong shade for me. Sanitized, original box included.",
    ),
    (
        "La Mer moisturizing cream 30ml, sealed",
        "Won it in a company raffle and have no use for it. Batch code checked, authentic.",
    ),
    (
        "Jo Malone Wild Bluebell cologne 100ml",
        "My partner didn't like the scent. Plenty left, sprayed only a few times.",
    ),
];

const APPLIANCE: &[(&str, &str)] = &[
    (
        "Xiaomi robot vacuum Pro",
        "Dutifully cleaned every day until I switched to a wet-dry vacuum. Works perfectly.",
    ),
    (
        "Dyson V10 cordless vacuum",
        "Suction still strong. Battery has aged, about ten minutes on max. Several heads included.",
    ),
    (
        "Joyoung high-speed blender",
        "Used for a year making baby food, no longer needed. Blades sharp, no odor.",
    ),
    (
        "Midea 20L compact microwave",
        "Rental essential for reheating, small footprint. Cosmetically worn but fully working.",
    ),
    (
        "Philips ionic hair dryer",
        "Strong airflow with ion function. Barely used, looks new.",
    ),
];

const SPORTS: &[(&str, &str)] = &[
    (
        "Decathlon dumbbell set 15kg",
        "Planned to train at home, became a door stop instead. Heavy, pickup only.",
    ),
    (
        "Yonex badminton racket",
        "Freshly strung at 26 lbs. One tiny paint chip on the frame, doesn't affect play.",
    ),
    (
        "Aluminum road bike",
        "Under 300km ridden, shifting and brakes all good. New job makes commuting by bike impractical.",
    ),
    (
        "Yoga mat and foam roller set",
        "Thick non-slip mat, never used. Good for home workout beginners.",
    ),
];

const OTHERS: &[(&str, &str)] = &[
    (
        "Concert tickets, random seats",
        "Bought too many, selling at face value to fellow fans. Seats are random, payment first.",
    ),
    (
        "Starbucks gift card, 500 value",
        "Company perk and I don't drink coffee. 80% of face value, code unscratched.",
    ),
    (
        "Three-level wooden cat tree",
        "The cat refuses to use it, pure decoration. Solid wood, practically new.",
    ),
    (
        "Harry Potter blind box, secret edition",
        "Opened and put straight into a display case, flawless. Local only, inspect in person.",
    ),
];

/// Price range and templates for a category.
pub(super) fn builtin_entry(category: Category) -> (PriceRange, Vec<ProductTemplate>) {
    let (range, rows) = match category {
        Category::Electronics => (PriceRange::new(300.0, 12000.0), ELECTRONICS),
        Category::Books => (PriceRange::new(5.0, 300.0), BOOKS),
        Category::Clothing => (PriceRange::new(20.0, 2000.0), CLOTHING),
        Category::Furniture => (PriceRange::new(80.0, 8000.0), FURNITURE),
        Category::Beauty => (PriceRange::new(20.0, 3000.0), BEAUTY),
        Category::Sports => (PriceRange::new(30.0, 5000.0), SPORTS),
        Category::Appliance => (PriceRange::new(100.0, 9000.0), APPLIANCE),
        Category::Others => (PriceRange::new(10.0, 3000.0), OTHERS),
    };

    let templates = rows
        .iter()
        .map(|(title, description)| ProductTemplate::new(*title, *description))
        .collect();

    (range, templates)
}

pub(super) fn default_catalog() -> BTreeMap<Category, CategoryConfig> {
    Category::ALL
        .iter()
        .map(|&category| {
            let (price_range, templates) = builtin_entry(category);
            (
                category,
                CategoryConfig {
                    price_range,
                    templates,
                },
            )
        })
        .collect()
}
