use crate::models::{BusinessArchetype, BusinessType};

fn archetype(
    id: &str,
    name: &str,
    business_type: BusinessType,
    keywords: &[&str],
    description: &str,
) -> BusinessArchetype {
    BusinessArchetype {
        id: id.to_string(),
        name: name.to_string(),
        business_type,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
    }
}

/// Built-in archetypes in catalog order (earlier entries win score ties)
pub fn builtin_archetypes() -> Vec<BusinessArchetype> {
    use BusinessType::{Both, Goods, Service};

    vec![
        archetype(
            "tailoring",
            "Tailoring Services",
            Goods,
            &["sewing", "fashion", "design", "alterations", "embroidery", "pattern making", "stitching", "garment making"],
            "A tailoring business involves creating, altering, and repairing clothing items. It can range from basic alterations to custom clothing design, with the flexibility to work from home or establish a shop.",
        ),
        archetype(
            "cooking",
            "Cooking Services",
            Goods,
            &["cooking", "food preparation", "nutrition", "catering", "baking", "recipe development", "culinary", "food service"],
            "A cooking business offering custom meal preparation, tiffin services and cooking classes. Suited to people with culinary expertise and a passion for food.",
        ),
        archetype(
            "handicrafts",
            "Handicrafts Business",
            Goods,
            &["art", "craft", "creativity", "handmade", "traditional arts", "pottery", "woodwork", "art & craft"],
            "A handicrafts business creating and selling handmade items, traditional art pieces and custom crafts, sold online or at local markets.",
        ),
        archetype(
            "tutoring",
            "Online Tutoring",
            Service,
            &["teaching", "education", "communication", "subject expertise", "mentoring", "training", "academic"],
            "An online tutoring business offering personalised education to students, covering academic subjects, skill development or exam preparation.",
        ),
        archetype(
            "beauty_services",
            "Beauty Services",
            Service,
            &["beauty", "makeup", "hair styling", "skincare", "aesthetics", "customer service", "beauty & makeup"],
            "A beauty services business offering makeup, hair styling and skincare. It can operate from home, as a mobile service, or from a salon.",
        ),
        archetype(
            "online_business",
            "Online Business",
            Both,
            &["technology", "digital marketing", "e-commerce", "social media", "content creation", "analytics", "online"],
            "An online business using digital platforms to sell products or services, including e-commerce stores, digital marketing and content creation.",
        ),
        archetype(
            "food_business",
            "Food Business",
            Goods,
            &["cooking", "food service", "restaurant management", "customer service", "hygiene", "menu planning", "culinary"],
            "Commercial food preparation and sales, including small eateries, food carts and packaged specialty foods, with proper licensing and food safety compliance.",
        ),
        archetype(
            "boutique",
            "Fashion Boutique",
            Goods,
            &["fashion", "retail", "customer service", "visual merchandising", "trend analysis", "sales", "clothing"],
            "A boutique selling carefully curated fashion items and accessories, built on unique products and personalised customer service.",
        ),
        archetype(
            "daycare",
            "Daycare Center",
            Service,
            &["childcare", "education", "patience", "communication", "safety management", "activity planning", "teaching"],
            "Supervised care and early childhood education for young children, requiring proper licensing, child safety measures and educational programming.",
        ),
        archetype(
            "event_planning",
            "Event Planning",
            Service,
            &["organization", "communication", "creativity", "vendor management", "time management", "coordination", "planning"],
            "Organising and coordinating weddings, corporate functions, parties and celebrations. Requires strong organisational and communication skills.",
        ),
        archetype(
            "jewelry_making",
            "Jewelry Making",
            Goods,
            &["jewelry design", "metalwork", "creativity", "precision", "art", "craftsmanship", "jewelry making"],
            "Designing and creating handmade jewelry from a range of materials, sold online, at craft fairs or through retail partnerships.",
        ),
        archetype(
            "photography",
            "Photography Services",
            Service,
            &["photography", "creativity", "technical skills", "editing", "customer service", "marketing", "camera"],
            "Professional photo services for events, portraits and commercial clients. Requires technical skill, equipment investment and marketing.",
        ),
        archetype(
            "catering",
            "Catering Services",
            Service,
            &["cooking", "event management", "food service", "logistics", "customer service", "time management", "catering"],
            "Food service for events, parties and gatherings. Requires food safety certification, reliable transport and large-batch cooking.",
        ),
        archetype(
            "home_bakery",
            "Home Bakery",
            Goods,
            &["baking", "decoration", "creativity", "food safety", "customer service", "time management", "cooking"],
            "Baking and selling cakes, cookies, bread and pastries from a home kitchen for local customers and special occasions.",
        ),
        archetype(
            "consulting",
            "Consulting Services",
            Service,
            &["expertise", "communication", "analysis", "problem solving", "business knowledge", "mentoring", "management"],
            "Professional advice and solutions for businesses or individuals in fields such as business, technology or personal development.",
        ),
    ]
}
