//! Static menu content shown on the landing page.

pub struct MenuCategory {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

/// A card with its own order button.
pub struct Showcase {
    pub name: &'static str,
    pub price: &'static str,
    pub blurb: &'static str,
}

pub const FEATURED: Showcase = Showcase {
    name: "Lotus Biscoff Waffle",
    price: "₹219",
    blurb: "Crisp Belgian waffle layered with Biscoff spread, crushed cookies and vanilla cream.",
};

pub const MENU: &[MenuCategory] = &[
    MenuCategory {
        title: "Classic Waffles",
        items: &[
            ("Maple Butter", "₹129"),
            ("Triple Chocolate", "₹169"),
            ("Nutella", "₹189"),
            ("Red Velvet", "₹179"),
        ],
    },
    MenuCategory {
        title: "Thick Shakes",
        items: &[
            ("Oreo Crunch", "₹159"),
            ("Kitkat", "₹169"),
            ("Belgian Chocolate", "₹179"),
            ("Strawberry Cream", "₹149"),
        ],
    },
    MenuCategory {
        title: "Pancakes & More",
        items: &[
            ("Mini Pancakes", "₹139"),
            ("Brownie Sundae", "₹159"),
            ("Waffle Pops", "₹149"),
        ],
    },
];

pub const SIGNATURES: &[Showcase] = &[
    Showcase {
        name: "Hangout Special",
        price: "₹249",
        blurb: "Double-stacked waffle with Nutella, brownie chunks and a scoop of ice cream.",
    },
    Showcase {
        name: "Ferrero Overload",
        price: "₹239",
        blurb: "Hazelnut waffle drizzled with Ferrero sauce and roasted nuts.",
    },
    Showcase {
        name: "Blueberry Cheesecake",
        price: "₹229",
        blurb: "Cream-cheese waffle topped with blueberry compote.",
    },
];

pub const HANDCRAFTED: &[Showcase] = &[
    Showcase {
        name: "Salted Caramel Shake",
        price: "₹189",
        blurb: "Slow-cooked caramel blended with sea salt and vanilla.",
    },
    Showcase {
        name: "Biscoff Freakshake",
        price: "₹209",
        blurb: "Biscoff shake crowned with cream, cookies and a waffle wedge.",
    },
    Showcase {
        name: "Mango Mastani",
        price: "₹179",
        blurb: "Alphonso mango shake with dry fruits and ice cream.",
    },
];

/// Navigation entries: link text and the id of the section they lead to.
pub const SECTIONS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("Menu", "menu"),
    ("Signature", "signature"),
    ("Shakes", "shakes"),
    ("About", "about"),
    ("Contact", "contact"),
];
