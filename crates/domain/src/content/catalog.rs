use super::{
    Author, BlogPost, ContactDetails, DestinationCard, Difficulty, Faq, FooterColumn, HeroSlide,
    HeritageTrail, Link, NavGroup, NavItem, NavLink, Service, Testimonial, TileSize, Trek,
};

/// Top navigation.
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        href: "#home",
        children: &[],
    },
    NavItem {
        label: "Destinations",
        href: "#destinations",
        children: &[
            NavGroup {
                group: "TOP DESTINATIONS",
                items: &[
                    NavLink {
                        label: "All Destinations",
                        description: "Handpicked destinations featuring mountains, cities, nature, and culture.",
                        href: "#all-destinations",
                    },
                    NavLink {
                        label: "International Tours",
                        description: "Carefully planned international holiday packages and tours.",
                        href: "#international-tours",
                    },
                ],
            },
            NavGroup {
                group: "CATEGORY BASED",
                items: &[
                    NavLink {
                        label: "City Tours",
                        description: "Guided tours through historic cities, markets, temples, and landmarks.",
                        href: "#city-tours",
                    },
                    NavLink {
                        label: "Mountain Tours",
                        description: "Scenic mountain regions, hill stations, and Himalayan viewpoints.",
                        href: "#mountain-tours",
                    },
                ],
            },
        ],
    },
    NavItem {
        label: "Services",
        href: "#services",
        children: &[],
    },
    NavItem {
        label: "Contact",
        href: "/contact",
        children: &[],
    },
    NavItem {
        label: "About Us",
        href: "#about",
        children: &[],
    },
];

/// Hero carousel slides.
pub static HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        title: "Everest Base Camp",
        image: "https://images.unsplash.com/photo-1544735716-392fe2489ffa?w=800&q=80",
    },
    HeroSlide {
        title: "Poon Hill Trek",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&q=80",
    },
    HeroSlide {
        title: "Ama Yangri",
        image: "https://images.unsplash.com/photo-1486870591958-9b9d0d1dda99?w=800&q=80",
    },
    HeroSlide {
        title: "Manaslu Circuit",
        image: "https://images.unsplash.com/photo-1571068316344-75bc76f77890?w=800&q=80",
    },
];

/// Destination fan cards.
pub static DESTINATION_CARDS: &[DestinationCard] = &[
    DestinationCard {
        title: "Relax in nature",
        description: "Peaceful destinations and breathtaking landscapes.",
        image: "/heritage1.jpg",
        cta: false,
    },
    DestinationCard {
        title: "Travel beyond borders",
        description: "Carefully planned international packages and guided tours.",
        image: "/heritage2.jpg",
        cta: false,
    },
    DestinationCard {
        title: "Discover cities, heritage & local life",
        description: "Guided tours through historic cities, markets, temples, and landmarks.",
        image: "/heritage3.jpg",
        cta: true,
    },
    DestinationCard {
        title: "Journey into the Himalayas",
        description: "Scenic mountain regions, hill stations, and Himalayan viewpoints.",
        image: "/heritage1.jpg",
        cta: false,
    },
    DestinationCard {
        title: "World-class spots",
        description: "Chosen by travelers around the world.",
        image: "/heritage4.jpg",
        cta: false,
    },
];

/// Expedition treks.
pub static EXPEDITION_TREKS: &[Trek] = &[
    Trek {
        title: "Everest Base Camp",
        price_npr: 10_000,
        description: "Experience the world's most iconic trek as you journey through Sherpa villages, ancient monasteries, and dramatic Himalayan landscapes to the base of Mount Everest.",
        difficulty: Difficulty::Moderate,
        duration_days: 5,
        max_altitude_m: 5_000,
        image: "https://images.unsplash.com/photo-1544735716-392fe2489ffa?w=800&q=80",
    },
    Trek {
        title: "Gokyo Trek",
        price_npr: 5_000,
        description: "Discover the serene beauty of the Gokyo Valley, famous for its turquoise glacial lakes and panoramic views of Everest, Cho Oyu, and Makalu.",
        difficulty: Difficulty::Easy,
        duration_days: 10,
        max_altitude_m: 4_000,
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&q=80",
    },
    Trek {
        title: "Langtang Valley Trek",
        price_npr: 9_000,
        description: "Explore the scenic Langtang valley, known for its lush forests, alpine meadows, and traditional Tamang villages close to Kathmandu.",
        difficulty: Difficulty::Moderate,
        duration_days: 8,
        max_altitude_m: 4_000,
        image: "https://images.unsplash.com/photo-1486870591958-9b9d0d1dda99?w=800&q=80",
    },
    Trek {
        title: "Annapurna Circuit",
        price_npr: 12_000,
        description: "Journey through diverse landscapes, from subtropical villages to high mountain passes.",
        difficulty: Difficulty::Hard,
        duration_days: 12,
        max_altitude_m: 5_400,
        image: "https://images.unsplash.com/photo-1571068316344-75bc76f77890?w=800&q=80",
    },
    Trek {
        title: "Manaslu Circuit",
        price_npr: 11_000,
        description: "Trek around the eighth highest mountain in the world, experiencing remote villages and stunning mountain vistas.",
        difficulty: Difficulty::Hard,
        duration_days: 14,
        max_altitude_m: 5_100,
        image: "https://images.unsplash.com/photo-1519904981063-b0cf448d479e?w=800&q=80",
    },
];

/// Heritage trail cards.
pub static HERITAGE_TRAILS: &[HeritageTrail] = &[
    HeritageTrail {
        title: "Kathmandu Valley Heritage",
        description: "A cultural journey through historic temples, palaces, and traditions at the heart of Nepal.",
        image: "/heritage1.jpg",
    },
    HeritageTrail {
        title: "Boudhanath Stupa",
        description: "One of the largest stupas in Nepal and a UNESCO World Heritage Site.",
        image: "/heritage2.jpg",
    },
    HeritageTrail {
        title: "Swayambhunath Temple",
        description: "Ancient religious architecture atop a hill in Kathmandu Valley.",
        image: "/heritage3.jpg",
    },
    HeritageTrail {
        title: "Pashupatinath Temple",
        description: "Sacred Hindu temple complex on the banks of Bagmati River.",
        image: "/heritage4.jpg",
    },
    HeritageTrail {
        title: "Durbar Square",
        description: "Royal palaces, courtyards, and temples of the old Malla kings.",
        image: "/heritage4.jpg",
    },
];

/// "Why us" service tiles.
pub static SERVICES: &[Service] = &[
    Service {
        icon: "plane",
        title: "Air Tickets",
        description: "Book carbon-offset flights for guilt-free travel.",
        image: "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=800&q=80",
        link: "/air-tickets",
    },
    Service {
        icon: "leaf",
        title: "Tour Packages",
        description: "Curated eco-friendly tours to sustainable destinations.",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&q=80",
        link: "/tour-packages",
    },
    Service {
        icon: "car",
        title: "Vehicle Hire",
        description: "Travel with low-emission vehicles for a sustainable journey.",
        image: "https://images.unsplash.com/photo-1449965408869-eaa3f722e40d?w=800&q=80",
        link: "/vehicle-hire",
    },
    Service {
        icon: "building",
        title: "Hotel Bookings",
        description: "Stay at handpicked hotels and lodges that respect local communities.",
        image: "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=800&q=80",
        link: "/hotel-bookings",
    },
];

/// Customer testimonials.
pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Daniel Weber",
        country: "United States of America",
        rating: 5,
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=300&auto=format&fit=crop",
        text: "The Gokyo Trek exceeded all my expectations. Peaceful trails, stunning lakes, and excellent planning. Everything from accommodation to safety was handled professionally.",
    },
    Testimonial {
        name: "Sarah Mitchell",
        country: "United Kingdom",
        rating: 5,
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=300&auto=format&fit=crop",
        text: "The Everest Base Camp trek was perfectly organized, and our guide was incredibly supportive throughout the journey. Nepal is beautiful, and this team made it even better.",
    },
    Testimonial {
        name: "Lucas Moreau",
        country: "Belgium",
        rating: 5,
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=300&auto=format&fit=crop",
        text: "Great service from start to finish. The guides were knowledgeable, friendly, and truly passionate about the mountains. I would definitely book another trek with them.",
    },
    Testimonial {
        name: "Emma Johnson",
        country: "Australia",
        rating: 5,
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=300&auto=format&fit=crop",
        text: "An unforgettable experience! The team took care of every detail, making the journey smooth and enjoyable. Highly recommend for anyone wanting to explore Nepal.",
    },
    Testimonial {
        name: "Hiroshi Tanaka",
        country: "Japan",
        rating: 5,
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=300&auto=format&fit=crop",
        text: "Professional, reliable, and genuinely caring guides. The Annapurna Circuit was the adventure of a lifetime, and I felt safe and supported every step of the way.",
    },
];

const SUMAN: Author = Author {
    name: "Suman Thapa",
    avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&q=80",
};

const ANISHA: Author = Author {
    name: "Anisha Gurung",
    avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&q=80",
};

/// Blog teasers.
pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Everest Base Camp: A Journey to the Roof of the World",
        description: "Discover what it truly feels like to trek to Everest Base Camp, from breathtaking mountain views to Sherpa culture along the trail.",
        author: SUMAN,
        published: (2024, 3, 18),
        image: "https://images.unsplash.com/photo-1544735716-392fe2489ffa?w=800&q=80",
        size: TileSize::Large,
    },
    BlogPost {
        id: 2,
        title: "Annapurna Circuit Trek: Why It's a Trekker's Favorite",
        description: "Explore why the Annapurna Circuit is one of Nepal's most diverse and rewarding trekking routes.",
        author: SUMAN,
        published: (2024, 3, 18),
        image: "https://images.unsplash.com/photo-1571068316344-75bc76f77890?w=800&q=80",
        size: TileSize::Small,
    },
    BlogPost {
        id: 3,
        title: "Manaslu Circuit Trek: The Untouched Himalayan Experience",
        description: "Experience raw nature, remote villages, and spectacular mountain landscapes on this off-the-beaten-path trek.",
        author: Author {
            name: "Pooja Shrestha",
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&q=80",
        },
        published: (2023, 6, 22),
        image: "https://images.unsplash.com/photo-1519904981063-b0cf448d479e?w=800&q=80",
        size: TileSize::Large,
    },
    BlogPost {
        id: 4,
        title: "Best Treks in Nepal for First-Time Trekkers",
        description: "New to trekking? Here's a guide to beginner-friendly treks in Nepal that offer stunning scenery without extreme difficulty.",
        author: Author {
            name: "Ramesh Adhikari",
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&q=80",
        },
        published: (2023, 10, 12),
        image: "https://images.unsplash.com/photo-1486870591958-9b9d0d1dda99?w=800&q=80",
        size: TileSize::Small,
    },
    BlogPost {
        id: 5,
        title: "What to Pack for Trekking in Nepal",
        description: "A complete packing checklist to ensure you're well-prepared for changing weather and terrain.",
        author: ANISHA,
        published: (2023, 5, 10),
        image: "https://images.unsplash.com/photo-1551632811-561732d1e306?w=800&q=80",
        size: TileSize::Small,
    },
];

/// Frequently asked questions.
pub static FAQS: &[Faq] = &[
    Faq {
        question: "What destinations do you cover in Nepal?",
        answer: "We cover all major destinations including Kathmandu, Pokhara, Chitwan, Lumbini, Everest Region, Annapurna Region, Mustang, Langtang, and many off-the-beaten-path locations across Nepal.",
    },
    Faq {
        question: "Do you arrange trekking and hiking tours?",
        answer: "Yes, we arrange comprehensive trekking and hiking tours across Nepal, including popular routes like Everest Base Camp, Annapurna Circuit, and many others.",
    },
    Faq {
        question: "Are your guides licensed and experienced?",
        answer: "All our guides are fully licensed by the Nepal Tourism Board and have years of experience leading tours and treks in the Himalayas.",
    },
    Faq {
        question: "What is included in your tour packages?",
        answer: "Our tour packages typically include accommodation, meals, transportation, permits, guide services, and all necessary arrangements for your journey.",
    },
];

/// Footer link columns.
pub static FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "About",
        links: &[
            Link { label: "Our story", href: "/about/our-story" },
            Link { label: "Why us", href: "/about/why-us" },
            Link { label: "FAQ", href: "/faq" },
        ],
    },
    FooterColumn {
        title: "Treks",
        links: &[
            Link { label: "Everest Base Camp", href: "/treks/everest-base-camp" },
            Link { label: "Annapurna Base", href: "/treks/annapurna-base" },
            Link { label: "Annapurna Circuit", href: "/treks/annapurna-circuit" },
            Link { label: "Manaslu Circuit", href: "/treks/manaslu-circuit" },
            Link { label: "Langtang Valley", href: "/treks/langtang-valley" },
        ],
    },
    FooterColumn {
        title: "Services",
        links: &[
            Link { label: "Air Ticketing", href: "/services/air-ticketing" },
            Link { label: "Tour Packages", href: "/services/tour-packages" },
            Link { label: "Hotel Bookings", href: "/services/hotel-bookings" },
            Link { label: "Vehicle Hire", href: "/services/vehicle-hire" },
        ],
    },
    FooterColumn {
        title: "Support",
        links: &[
            Link { label: "Contact us", href: "/contact" },
            Link { label: "Privacy Policy", href: "/privacy-policy" },
            Link { label: "Terms of Service", href: "/terms-of-service" },
        ],
    },
];

/// Office contact details.
pub static CONTACT: ContactDetails = ContactDetails {
    phone: "+977-9812345678",
    email: "example@gmail.com",
    hours: "Monday to Friday, 9 AM - 6 PM (NPT)",
    address: "123 SaaS Street, Innovation City, Kathmandu",
    map_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3532.124776594684!2d85.31426287549777!3d27.71536897619562!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x39eb190b0e0e0e0e%3A0x0!2sKathmandu!5e0!3m2!1sen!2snp!4v1234567890",
};
