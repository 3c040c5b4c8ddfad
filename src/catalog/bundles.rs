use std::collections::HashMap;
use crate::models::{
    BusinessArchetype, BusinessType, CaseStudy, EnrichmentBundle, FinancialPlan, Mentor,
    MentorAddress, MentorAvailability, MentorContact, MentorFees, MentorMode, Milestones, Resource,
    Testimonial, WorkforcePlan,
};

const DATA_SOURCES: [&str; 4] = [
    "NSDC Skills Database",
    "MSME Success Stories",
    "Government Schemes Data",
    "Industry Reports",
];

const DEFAULT_PROFILE_PIC: &str =
    "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=400";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn milestones(month3: &str, month6: &str, month12: &str) -> Milestones {
    Milestones {
        month3: month3.to_string(),
        month6: month6.to_string(),
        month12: month12.to_string(),
    }
}

fn resource(title: &str, kind: &str, duration: &str, level: &str) -> Resource {
    Resource {
        title: title.to_string(),
        link: "#".to_string(),
        kind: kind.to_string(),
        duration: duration.to_string(),
        level: Some(level.to_string()),
    }
}

/// Financial ranges: investment, margin, break-even, income, equipment, opex, volume
struct Financials<'a> {
    ranges: [&'a str; 7],
    scaling: [&'a str; 3],
    tools: &'a [&'a str],
}

impl From<Financials<'_>> for FinancialPlan {
    fn from(f: Financials<'_>) -> Self {
        let [investment, margin, break_even, income, equipment, opex, volume] = f.ranges;
        let [month3, month6, month12] = f.scaling;

        FinancialPlan {
            investment: investment.to_string(),
            profit_margin: margin.to_string(),
            break_even: break_even.to_string(),
            monthly_income: Some(income.to_string()),
            equipment_cost: Some(equipment.to_string()),
            operational_expense: Some(opex.to_string()),
            initial_sales_volume: volume.to_string(),
            scaling_strategy: milestones(month3, month6, month12),
            tools_needed: strings(f.tools),
        }
    }
}

fn case_study(name: &str, location: &str, story: &str, achievement: &str) -> CaseStudy {
    CaseStudy {
        name: name.to_string(),
        location: location.to_string(),
        story: story.to_string(),
        achievement: achievement.to_string(),
    }
}

fn workforce(team: u32, roles: &[&str], growth: [&str; 3], tips: &[&str]) -> WorkforcePlan {
    let [month3, month6, month12] = growth;
    WorkforcePlan {
        initial_team_size: team,
        roles: strings(roles),
        growth_plan: milestones(month3, month6, month12),
        solo_tips: if tips.is_empty() { None } else { Some(strings(tips)) },
    }
}

struct MentorSeed<'a> {
    id: &'a str,
    name: &'a str,
    specialization: &'a [&'a str],
    business_type: BusinessType,
    experience: &'a str,
    rating: f32,
    total_mentees: u32,
    /// consultation, monthly, package
    fees: [&'a str; 3],
    email: &'a str,
    phone: &'a str,
    /// city, state, area
    address: [&'a str; 3],
    mode: MentorMode,
    languages: &'a [&'a str],
    bio: &'a str,
    achievements: &'a [&'a str],
    testimonial: (&'a str, &'a str, &'a str),
}

impl From<MentorSeed<'_>> for Mentor {
    fn from(seed: MentorSeed<'_>) -> Self {
        let [consultation, monthly, package] = seed.fees;
        let [city, state, area] = seed.address;
        let (client, business, feedback) = seed.testimonial;

        Mentor {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            profile_pic: DEFAULT_PROFILE_PIC.to_string(),
            specialization: strings(seed.specialization),
            business_type: seed.business_type,
            experience: seed.experience.to_string(),
            rating: seed.rating,
            total_mentees: seed.total_mentees,
            fees: MentorFees {
                consultation: consultation.to_string(),
                monthly: monthly.to_string(),
                package: package.to_string(),
            },
            contact: MentorContact {
                email: seed.email.to_string(),
                phone: seed.phone.to_string(),
                whatsapp: Some(seed.phone.to_string()),
                linkedin: None,
            },
            address: MentorAddress {
                city: city.to_string(),
                state: state.to_string(),
                area: area.to_string(),
            },
            availability: MentorAvailability {
                mode: seed.mode,
                timings: strings(&["10:00 AM - 12:00 PM", "2:00 PM - 5:00 PM"]),
                timezone: "IST".to_string(),
            },
            languages: strings(seed.languages),
            bio: seed.bio.to_string(),
            achievements: strings(seed.achievements),
            testimonials: vec![Testimonial {
                name: client.to_string(),
                business: business.to_string(),
                feedback: feedback.to_string(),
                rating: 5,
            }],
        }
    }
}

fn bundle(
    resources: Vec<Resource>,
    financials: Financials<'_>,
    case_studies: Vec<CaseStudy>,
    workforce_plan: WorkforcePlan,
    mentor: MentorSeed<'_>,
) -> EnrichmentBundle {
    EnrichmentBundle {
        resources,
        financials: financials.into(),
        case_studies,
        workforce_plan,
        mentors: vec![mentor.into()],
        data_sources: strings(&DATA_SOURCES),
    }
}

/// Bundle used for archetypes that have no entry in the enrichment table
pub fn generic_bundle(archetype: &BusinessArchetype) -> EnrichmentBundle {
    let lower_name = archetype.name.to_lowercase();

    EnrichmentBundle {
        resources: vec![
            resource(&format!("{} Course", archetype.name), "Video Course", "30-40 hours", "All Levels"),
            resource("Business Certification", "Government Certification", "2-3 months", "Beginner"),
        ],
        financials: Financials {
            ranges: [
                "₹15,000 - ₹1,00,000",
                "25% - 50%",
                "3 - 8 months",
                "₹20,000 - ₹1,00,000",
                "₹10,000 - ₹80,000",
                "₹3,000 - ₹15,000/month",
                "15-30 orders per month",
            ],
            scaling: [
                "Focus on building customer base through quality work",
                "Expand services and customer base",
                "Consider expansion based on demand",
            ],
            tools: &["Essential Equipment", "Quality Materials", "Business Tools"],
        }
        .into(),
        case_studies: vec![case_study(
            "Success Story",
            "India",
            &format!("Started with basic skills and built a successful {} business.", lower_name),
            "Built a sustainable business with regular customers and good income.",
        )],
        workforce_plan: workforce(
            1,
            &["Primary Service Provider", "Quality Controller"],
            [
                "Start solo while building customer base",
                "Consider hiring part-time help",
                "Expand team based on demand",
            ],
            &[
                "Focus on quality and customer satisfaction",
                "Build strong supplier relationships",
                "Use time management effectively",
            ],
        ),
        mentors: vec![MentorSeed {
            id: &format!("mentor_{}_001", archetype.id),
            name: "Expert Mentor",
            specialization: &[archetype.name.as_str(), "Business Management"],
            business_type: archetype.business_type,
            experience: "5+ years in business",
            rating: 4.8,
            total_mentees: 30,
            fees: ["₹500/hour", "₹3,000/month", "₹8,000 (3 months)"],
            email: "mentor@example.com",
            phone: "+91-9876543210",
            address: ["Major City", "State", "Business District"],
            mode: MentorMode::Both,
            languages: &["Hindi", "English"],
            bio: &format!("Expert in {} with 5+ years of experience in running successful businesses.", lower_name),
            achievements: &[
                "Built successful business",
                "Trained multiple entrepreneurs",
                "Featured in business publications",
            ],
            testimonial: (
                "Success Story",
                archetype.name.as_str(),
                "Excellent guidance and practical advice for starting and growing the business.",
            ),
        }
        .into()],
        data_sources: strings(&DATA_SOURCES),
    }
}

/// Enrichment table keyed by archetype id
pub fn builtin_bundles() -> HashMap<String, EnrichmentBundle> {
    let mut table = HashMap::new();

    table.insert(
        "tailoring".to_string(),
        bundle(
            vec![
                resource("Complete Tailoring Course", "Video Course", "40 hours", "All Levels"),
                resource("NSDC Tailoring Certification", "Government Certification", "3 months", "Beginner"),
                resource("Pattern Making Masterclass", "Workshop", "2 weeks", "Intermediate"),
            ],
            Financials {
                ranges: [
                    "₹15,000 - ₹75,000",
                    "25% - 45%",
                    "4 - 8 months",
                    "₹20,000 - ₹80,000",
                    "₹10,000 - ₹50,000",
                    "₹3,000 - ₹8,000/month",
                    "15-25 garments per month",
                ],
                scaling: [
                    "Build a customer base through quality work and word-of-mouth referrals",
                    "Add designer alterations and custom clothing",
                    "Open a small shop or expand the home setup to 50+ regular customers",
                ],
                tools: &["Sewing Machine", "Overlock Machine", "Iron & Board", "Cutting Table", "Measuring Tools"],
            },
            vec![case_study(
                "Priya Sharma",
                "Jaipur, Rajasthan",
                "Started with basic alterations from home after learning tailoring through a government program.",
                "Built a base of 200+ regular clients and earns ₹45,000 monthly while working from home.",
            )],
            workforce(
                1,
                &["Tailor/Designer", "Quality Controller"],
                [
                    "Continue solo operations while building customer base",
                    "Hire a part-time assistant for basic alterations",
                    "Expand to 2-3 team members including a junior tailor",
                ],
                &[
                    "Use time-blocking to manage different types of work",
                    "Invest in quality equipment to increase efficiency",
                    "Create standard pricing charts and measurement forms",
                ],
            ),
            MentorSeed {
                id: "mentor_tailoring_001",
                name: "Sunita Verma",
                specialization: &["Custom Tailoring", "Bridal Wear", "Boutique Setup"],
                business_type: BusinessType::Goods,
                experience: "15+ years in tailoring",
                rating: 4.9,
                total_mentees: 120,
                fees: ["₹500/hour", "₹3,000/month", "₹8,000 (3 months)"],
                email: "sunita.verma@example.com",
                phone: "+91-9810012345",
                address: ["Jaipur", "Rajasthan", "Malviya Nagar"],
                mode: MentorMode::Both,
                languages: &["Hindi", "English", "Rajasthani"],
                bio: "Runs a bridal tailoring studio with eight artisans and trains women starting home tailoring units.",
                achievements: &["Trained 120+ home tailors", "State award for women entrepreneurs"],
                testimonial: ("Meena Joshi", "Meena's Stitch Studio", "Helped me price my work properly and double my monthly orders."),
            },
        ),
    );

    table.insert(
        "cooking".to_string(),
        bundle(
            vec![
                resource("Home Food Business Essentials", "Video Course", "25 hours", "Beginner"),
                resource("FSSAI Basic Registration Guide", "Government Certification", "1 month", "Beginner"),
            ],
            Financials {
                ranges: [
                    "₹10,000 - ₹50,000",
                    "30% - 50%",
                    "2 - 6 months",
                    "₹15,000 - ₹60,000",
                    "₹5,000 - ₹30,000",
                    "₹5,000 - ₹15,000/month",
                    "20-40 tiffins per day",
                ],
                scaling: [
                    "Serve a fixed tiffin route in your neighbourhood",
                    "Add weekend party orders and festive menus",
                    "Partner with offices for daily lunch subscriptions",
                ],
                tools: &["Commercial Gas Stove", "Large Cookware", "Insulated Tiffin Boxes", "Refrigerator"],
            },
            vec![case_study(
                "Lakshmi Iyer",
                "Chennai, Tamil Nadu",
                "Began cooking lunch for four office workers in her building.",
                "Now delivers 150 meals a day with a team of five.",
            )],
            workforce(
                1,
                &["Cook", "Delivery Partner"],
                [
                    "Cook and deliver yourself to keep costs low",
                    "Hire a kitchen helper for prep work",
                    "Add a delivery partner and a second cook",
                ],
                &["Plan weekly menus in advance", "Buy staples in bulk", "Track every order in a notebook or app"],
            ),
            MentorSeed {
                id: "mentor_cooking_001",
                name: "Anjali Nair",
                specialization: &["Tiffin Services", "Menu Costing"],
                business_type: BusinessType::Goods,
                experience: "10+ years in food business",
                rating: 4.7,
                total_mentees: 85,
                fees: ["₹400/hour", "₹2,500/month", "₹6,500 (3 months)"],
                email: "anjali.nair@example.com",
                phone: "+91-9845023456",
                address: ["Kochi", "Kerala", "Kakkanad"],
                mode: MentorMode::Online,
                languages: &["Malayalam", "English", "Hindi"],
                bio: "Built a cloud-kitchen brand from her home kitchen and coaches home cooks on pricing and hygiene.",
                achievements: &["Operates three cloud kitchens", "FSSAI hygiene trainer"],
                testimonial: ("Rekha Pillai", "Rekha's Kitchen", "Her menu costing sheet changed how I run my business."),
            },
        ),
    );

    table.insert(
        "handicrafts".to_string(),
        bundle(
            vec![
                resource("Selling Handmade Products Online", "Video Course", "20 hours", "Beginner"),
                resource("Handicrafts Artisan Card Registration", "Government Scheme", "1 month", "All Levels"),
            ],
            Financials {
                ranges: [
                    "₹5,000 - ₹40,000",
                    "40% - 60%",
                    "3 - 6 months",
                    "₹10,000 - ₹50,000",
                    "₹3,000 - ₹20,000",
                    "₹2,000 - ₹8,000/month",
                    "30-60 pieces per month",
                ],
                scaling: [
                    "Sell at local exhibitions and weekly haats",
                    "List products on online craft marketplaces",
                    "Take bulk orders from boutiques and corporate gifting",
                ],
                tools: &["Basic Craft Tools", "Raw Materials", "Packaging Supplies", "Product Photography Setup"],
            },
            vec![case_study(
                "Kavita Devi",
                "Madhubani, Bihar",
                "Turned her family's painting tradition into a small online store.",
                "Ships to customers in 12 countries and employs six local artists.",
            )],
            workforce(
                1,
                &["Artisan", "Packaging & Dispatch"],
                [
                    "Create and sell on your own",
                    "Train one apprentice for repeat designs",
                    "Form a small artisan group for bulk orders",
                ],
                &["Photograph every product well", "Tell the story behind each craft"],
            ),
            MentorSeed {
                id: "mentor_handicrafts_001",
                name: "Rukmini Das",
                specialization: &["Craft Marketing", "Export Readiness"],
                business_type: BusinessType::Goods,
                experience: "12+ years with artisan collectives",
                rating: 4.8,
                total_mentees: 200,
                fees: ["₹300/hour", "₹2,000/month", "₹5,000 (3 months)"],
                email: "rukmini.das@example.com",
                phone: "+91-9830034567",
                address: ["Kolkata", "West Bengal", "Salt Lake"],
                mode: MentorMode::Both,
                languages: &["Bengali", "Hindi", "English"],
                bio: "Connects rural artisans with urban and export buyers through fair-trade channels.",
                achievements: &["Mentored 200+ artisans", "Led craft pavilion at national trade fair"],
                testimonial: ("Sarita Kumari", "Sarita Crafts", "She showed me how to price handmade work fairly."),
            },
        ),
    );

    table.insert(
        "tutoring".to_string(),
        bundle(
            vec![
                resource("Teaching Online Effectively", "Video Course", "15 hours", "All Levels"),
                resource("Digital Classroom Tools", "Workshop", "1 week", "Beginner"),
            ],
            Financials {
                ranges: [
                    "₹5,000 - ₹25,000",
                    "60% - 80%",
                    "1 - 3 months",
                    "₹15,000 - ₹75,000",
                    "₹5,000 - ₹20,000",
                    "₹1,000 - ₹3,000/month",
                    "10-20 students per month",
                ],
                scaling: [
                    "Teach one-on-one sessions to build reputation",
                    "Start small-group batches",
                    "Record courses and sell them online",
                ],
                tools: &["Laptop", "Headset", "Stable Internet", "Digital Whiteboard"],
            },
            vec![case_study(
                "Neha Gupta",
                "Lucknow, Uttar Pradesh",
                "Started tutoring neighbourhood children in maths after her graduation.",
                "Runs online batches for 80 students across three states.",
            )],
            workforce(
                1,
                &["Tutor", "Batch Coordinator"],
                [
                    "Teach all sessions yourself",
                    "Bring in a second tutor for another subject",
                    "Hire a coordinator for scheduling and parents",
                ],
                &["Keep a fixed weekly timetable", "Share progress reports with parents"],
            ),
            MentorSeed {
                id: "mentor_tutoring_001",
                name: "Dr. Meera Krishnan",
                specialization: &["EdTech", "Curriculum Design"],
                business_type: BusinessType::Service,
                experience: "18+ years in education",
                rating: 4.9,
                total_mentees: 150,
                fees: ["₹600/hour", "₹3,500/month", "₹9,000 (3 months)"],
                email: "meera.krishnan@example.com",
                phone: "+91-9880045678",
                address: ["Bengaluru", "Karnataka", "Jayanagar"],
                mode: MentorMode::Online,
                languages: &["English", "Tamil", "Kannada"],
                bio: "Former school principal who now helps teachers start independent online tutoring practices.",
                achievements: &["Designed curriculum for 40 schools", "Author of two teaching guides"],
                testimonial: ("Pooja Rao", "Pooja's Maths Circle", "I went from three students to forty in six months."),
            },
        ),
    );

    table.insert(
        "beauty_services".to_string(),
        bundle(
            vec![
                resource("Professional Makeup Artistry", "Video Course", "35 hours", "Beginner"),
                resource("Beauty & Wellness Sector Skill Certification", "Government Certification", "3 months", "Beginner"),
            ],
            Financials {
                ranges: [
                    "₹25,000 - ₹1,50,000",
                    "35% - 55%",
                    "4 - 9 months",
                    "₹20,000 - ₹90,000",
                    "₹20,000 - ₹1,00,000",
                    "₹5,000 - ₹20,000/month",
                    "40-60 clients per month",
                ],
                scaling: [
                    "Offer home visits for regular clients",
                    "Add bridal and party packages",
                    "Open a small salon with one or two chairs",
                ],
                tools: &["Makeup Kit", "Hair Styling Tools", "Salon Chair", "Sterilizer"],
            },
            vec![case_study(
                "Farah Khan",
                "Hyderabad, Telangana",
                "Did bridal makeup for relatives before taking paid bookings through social media.",
                "Books 25 weddings a season and runs a two-chair salon.",
            )],
            workforce(
                1,
                &["Beautician", "Assistant"],
                [
                    "Work solo with home visits",
                    "Add an assistant for bridal bookings",
                    "Hire a second beautician for the salon",
                ],
                &["Post before-and-after photos", "Keep strict hygiene standards"],
            ),
            MentorSeed {
                id: "mentor_beauty_services_001",
                name: "Shalini Kapoor",
                specialization: &["Bridal Makeup", "Salon Management"],
                business_type: BusinessType::Service,
                experience: "14+ years in beauty industry",
                rating: 4.8,
                total_mentees: 95,
                fees: ["₹700/hour", "₹4,000/month", "₹10,000 (3 months)"],
                email: "shalini.kapoor@example.com",
                phone: "+91-9811056789",
                address: ["New Delhi", "Delhi", "Lajpat Nagar"],
                mode: MentorMode::Offline,
                languages: &["Hindi", "English", "Punjabi"],
                bio: "Owns a chain of three salons and trains beauticians to set up their own studios.",
                achievements: &["Three salon branches", "Celebrity makeup artist"],
                testimonial: ("Nisha Arora", "Glow Studio", "Her salon setup checklist saved me months."),
            },
        ),
    );

    table.insert(
        "online_business".to_string(),
        bundle(
            vec![
                resource("E-commerce Fundamentals", "Video Course", "30 hours", "Beginner"),
                resource("Digital Marketing Certification", "Online Certification", "2 months", "Intermediate"),
            ],
            Financials {
                ranges: [
                    "₹10,000 - ₹1,00,000",
                    "20% - 50%",
                    "3 - 9 months",
                    "₹15,000 - ₹1,00,000",
                    "₹10,000 - ₹40,000",
                    "₹3,000 - ₹20,000/month",
                    "50-100 orders per month",
                ],
                scaling: [
                    "Launch on one marketplace with a focused product range",
                    "Run paid social campaigns and build an email list",
                    "Open your own storefront and expand the catalogue",
                ],
                tools: &["Laptop", "Smartphone", "E-commerce Platform", "Payment Gateway"],
            },
            vec![case_study(
                "Divya Menon",
                "Pune, Maharashtra",
                "Started reselling handloom sarees through a social media page.",
                "Runs her own online store with ₹3 lakh monthly revenue.",
            )],
            workforce(
                1,
                &["Store Manager", "Content Creator"],
                [
                    "Handle listings, orders and marketing yourself",
                    "Outsource product photography and content",
                    "Hire a part-time operations assistant",
                ],
                &["Automate order notifications", "Review analytics weekly"],
            ),
            MentorSeed {
                id: "mentor_online_business_001",
                name: "Ritu Malhotra",
                specialization: &["D2C Brands", "Performance Marketing"],
                business_type: BusinessType::Both,
                experience: "9+ years in e-commerce",
                rating: 4.7,
                total_mentees: 140,
                fees: ["₹800/hour", "₹5,000/month", "₹12,000 (3 months)"],
                email: "ritu.malhotra@example.com",
                phone: "+91-9820067890",
                address: ["Mumbai", "Maharashtra", "Andheri East"],
                mode: MentorMode::Online,
                languages: &["Hindi", "English"],
                bio: "Scaled two direct-to-consumer brands and advises first-time online sellers.",
                achievements: &["Built two D2C brands", "Speaker at e-commerce summits"],
                testimonial: ("Sneha Patil", "Kala Threads", "My online sales grew four times after her sessions."),
            },
        ),
    );

    table.insert(
        "food_business".to_string(),
        bundle(
            vec![
                resource("Running a Small Eatery", "Video Course", "30 hours", "Intermediate"),
                resource("FSSAI State License Guide", "Government Certification", "2 months", "All Levels"),
            ],
            Financials {
                ranges: [
                    "₹1,00,000 - ₹5,00,000",
                    "15% - 30%",
                    "8 - 18 months",
                    "₹40,000 - ₹2,00,000",
                    "₹75,000 - ₹3,00,000",
                    "₹25,000 - ₹80,000/month",
                    "60-120 customers per day",
                ],
                scaling: [
                    "Stabilise a short menu and daily footfall",
                    "Add delivery through food apps",
                    "Open a second outlet or a central kitchen",
                ],
                tools: &["Commercial Kitchen Equipment", "Refrigeration", "POS System", "Seating"],
            },
            vec![case_study(
                "Gurpreet Kaur",
                "Ludhiana, Punjab",
                "Opened a small dhaba-style eatery near an industrial area.",
                "Serves 300 meals a day and employs eleven people.",
            )],
            workforce(
                3,
                &["Head Cook", "Helper", "Cashier"],
                [
                    "Run with a core team of three",
                    "Add a second helper for peak hours",
                    "Hire a manager for a second outlet",
                ],
                &[],
            ),
            MentorSeed {
                id: "mentor_food_business_001",
                name: "Harleen Sethi",
                specialization: &["Restaurant Operations", "Food Safety"],
                business_type: BusinessType::Goods,
                experience: "16+ years in hospitality",
                rating: 4.6,
                total_mentees: 70,
                fees: ["₹900/hour", "₹5,500/month", "₹14,000 (3 months)"],
                email: "harleen.sethi@example.com",
                phone: "+91-9815078901",
                address: ["Chandigarh", "Punjab", "Sector 17"],
                mode: MentorMode::Both,
                languages: &["Punjabi", "Hindi", "English"],
                bio: "Restaurateur who helps small eateries fix their kitchen workflows and food costs.",
                achievements: &["Owns four restaurants", "Certified food safety auditor"],
                testimonial: ("Simran Gill", "Simran's Dhaba", "Cut my food waste in half within two months."),
            },
        ),
    );

    table.insert(
        "boutique".to_string(),
        bundle(
            vec![
                resource("Retail Store Management", "Video Course", "25 hours", "Intermediate"),
                resource("Visual Merchandising Basics", "Workshop", "1 week", "Beginner"),
            ],
            Financials {
                ranges: [
                    "₹2,00,000 - ₹8,00,000",
                    "30% - 50%",
                    "10 - 18 months",
                    "₹40,000 - ₹1,50,000",
                    "₹50,000 - ₹2,00,000",
                    "₹30,000 - ₹1,00,000/month",
                    "80-150 pieces per month",
                ],
                scaling: [
                    "Curate a signature collection for one customer segment",
                    "Add online sales through social media",
                    "Launch a private label line",
                ],
                tools: &["Shop Fixtures", "Mannequins", "Billing Software", "Inventory"],
            },
            vec![case_study(
                "Aisha Siddiqui",
                "Bhopal, Madhya Pradesh",
                "Started a boutique selling curated ethnic wear from local weavers.",
                "Runs two stores and an Instagram shop with 40,000 followers.",
            )],
            workforce(
                2,
                &["Owner/Buyer", "Sales Associate"],
                [
                    "Handle buying and sales with one associate",
                    "Add a second associate for weekends",
                    "Hire a store manager to free up buying time",
                ],
                &[],
            ),
            MentorSeed {
                id: "mentor_boutique_001",
                name: "Nandini Rao",
                specialization: &["Fashion Retail", "Sourcing"],
                business_type: BusinessType::Goods,
                experience: "13+ years in fashion retail",
                rating: 4.7,
                total_mentees: 60,
                fees: ["₹800/hour", "₹4,500/month", "₹11,000 (3 months)"],
                email: "nandini.rao@example.com",
                phone: "+91-9849089012",
                address: ["Hyderabad", "Telangana", "Banjara Hills"],
                mode: MentorMode::Both,
                languages: &["Telugu", "Hindi", "English"],
                bio: "Former fashion buyer who now mentors independent boutique owners on sourcing and margins.",
                achievements: &["Ran buying for a national retail chain", "Founded a designer boutique"],
                testimonial: ("Kiran Reddy", "Kiran Couture", "Her sourcing contacts transformed my collection."),
            },
        ),
    );

    table.insert(
        "daycare".to_string(),
        bundle(
            vec![
                resource("Early Childhood Care and Education", "Online Certification", "3 months", "Beginner"),
                resource("Child Safety and First Aid", "Workshop", "2 days", "All Levels"),
            ],
            Financials {
                ranges: [
                    "₹50,000 - ₹3,00,000",
                    "25% - 40%",
                    "6 - 12 months",
                    "₹30,000 - ₹1,20,000",
                    "₹30,000 - ₹1,50,000",
                    "₹15,000 - ₹50,000/month",
                    "10-25 children enrolled",
                ],
                scaling: [
                    "Start with a small group and strong parent referrals",
                    "Add after-school care and activity classes",
                    "Move to a larger licensed space",
                ],
                tools: &["Child-safe Furniture", "Learning Materials", "CCTV", "First Aid Kit"],
            },
            vec![case_study(
                "Sangeeta Mishra",
                "Noida, Uttar Pradesh",
                "Opened a daycare in her apartment for working parents in her society.",
                "Cares for 30 children with four trained caregivers.",
            )],
            workforce(
                2,
                &["Lead Caregiver", "Assistant Caregiver"],
                [
                    "Operate with two caregivers",
                    "Add an activity teacher",
                    "Hire a centre coordinator",
                ],
                &[],
            ),
            MentorSeed {
                id: "mentor_daycare_001",
                name: "Vandana Joshi",
                specialization: &["Early Childhood Education", "Preschool Setup"],
                business_type: BusinessType::Service,
                experience: "20+ years in early education",
                rating: 4.9,
                total_mentees: 75,
                fees: ["₹500/hour", "₹3,000/month", "₹8,000 (3 months)"],
                email: "vandana.joshi@example.com",
                phone: "+91-9822090123",
                address: ["Pune", "Maharashtra", "Kothrud"],
                mode: MentorMode::Both,
                languages: &["Marathi", "Hindi", "English"],
                bio: "Founded a network of preschools and advises women opening home daycares.",
                achievements: &["Founded five preschools", "Child safety trainer"],
                testimonial: ("Asha Kulkarni", "Little Steps Daycare", "Her licensing guidance was invaluable."),
            },
        ),
    );

    table.insert(
        "event_planning".to_string(),
        bundle(
            vec![
                resource("Event Management Fundamentals", "Video Course", "20 hours", "Beginner"),
                resource("Wedding Planning Masterclass", "Workshop", "1 week", "Intermediate"),
            ],
            Financials {
                ranges: [
                    "₹20,000 - ₹1,00,000",
                    "15% - 30%",
                    "4 - 10 months",
                    "₹25,000 - ₹1,50,000",
                    "₹10,000 - ₹50,000",
                    "₹5,000 - ₹25,000/month",
                    "2-5 events per month",
                ],
                scaling: [
                    "Plan birthdays and small family functions",
                    "Build a vendor network and take weddings",
                    "Pitch to companies for corporate events",
                ],
                tools: &["Laptop", "Planning Software", "Vendor Contacts", "Decor Inventory"],
            },
            vec![case_study(
                "Rashmi Agarwal",
                "Indore, Madhya Pradesh",
                "Organised friends' weddings before registering her planning firm.",
                "Handles 40 weddings a year with a team of six coordinators.",
            )],
            workforce(
                1,
                &["Lead Planner", "Event Coordinator"],
                [
                    "Plan events yourself with freelance help",
                    "Hire a coordinator for on-site execution",
                    "Build a team of three for parallel events",
                ],
                &["Keep a trusted vendor list", "Use checklists for every event"],
            ),
            MentorSeed {
                id: "mentor_event_planning_001",
                name: "Pallavi Desai",
                specialization: &["Wedding Planning", "Corporate Events"],
                business_type: BusinessType::Service,
                experience: "11+ years in events",
                rating: 4.7,
                total_mentees: 55,
                fees: ["₹700/hour", "₹4,000/month", "₹10,000 (3 months)"],
                email: "pallavi.desai@example.com",
                phone: "+91-9825001234",
                address: ["Ahmedabad", "Gujarat", "Navrangpura"],
                mode: MentorMode::Both,
                languages: &["Gujarati", "Hindi", "English"],
                bio: "Runs a destination wedding company and mentors new planners on vendor management.",
                achievements: &["500+ events delivered", "Destination wedding specialist"],
                testimonial: ("Hetal Shah", "Utsav Events", "She taught me how to quote and protect my margins."),
            },
        ),
    );

    table.insert(
        "jewelry_making".to_string(),
        bundle(
            vec![
                resource("Handmade Jewelry Design", "Video Course", "25 hours", "Beginner"),
                resource("Gem and Metal Basics", "Workshop", "2 weeks", "Intermediate"),
            ],
            Financials {
                ranges: [
                    "₹15,000 - ₹1,00,000",
                    "40% - 65%",
                    "3 - 8 months",
                    "₹15,000 - ₹80,000",
                    "₹10,000 - ₹60,000",
                    "₹3,000 - ₹12,000/month",
                    "40-80 pieces per month",
                ],
                scaling: [
                    "Sell at craft fairs and to friends",
                    "Open an online store with themed collections",
                    "Supply boutiques and take custom orders",
                ],
                tools: &["Jewelry Pliers", "Beading Supplies", "Soldering Kit", "Display Trays"],
            },
            vec![case_study(
                "Ananya Bose",
                "Kolkata, West Bengal",
                "Made terracotta jewelry as a hobby and sold it at college fests.",
                "Sells 500 pieces a month online and through three boutiques.",
            )],
            workforce(
                1,
                &["Designer/Maker", "Packaging Assistant"],
                [
                    "Design and make every piece yourself",
                    "Train a helper for repeat designs",
                    "Hire artisans for bulk production",
                ],
                &["Photograph pieces on models", "Launch small themed collections"],
            ),
            MentorSeed {
                id: "mentor_jewelry_making_001",
                name: "Radhika Sen",
                specialization: &["Jewelry Design", "Craft Branding"],
                business_type: BusinessType::Goods,
                experience: "10+ years in jewelry design",
                rating: 4.8,
                total_mentees: 65,
                fees: ["₹500/hour", "₹3,000/month", "₹8,000 (3 months)"],
                email: "radhika.sen@example.com",
                phone: "+91-9831012345",
                address: ["Kolkata", "West Bengal", "Ballygunge"],
                mode: MentorMode::Online,
                languages: &["Bengali", "English", "Hindi"],
                bio: "Designer behind a handmade jewelry label sold in twenty stores across India.",
                achievements: &["Label stocked in 20 stores", "Craft council award"],
                testimonial: ("Moumita Ghosh", "Mati Jewels", "She helped me find my signature style."),
            },
        ),
    );

    table.insert(
        "photography".to_string(),
        bundle(
            vec![
                resource("Professional Photography Foundations", "Video Course", "40 hours", "Beginner"),
                resource("Photo Editing with Lightroom", "Video Course", "12 hours", "Intermediate"),
            ],
            Financials {
                ranges: [
                    "₹60,000 - ₹3,00,000",
                    "40% - 60%",
                    "6 - 12 months",
                    "₹25,000 - ₹1,50,000",
                    "₹50,000 - ₹2,50,000",
                    "₹5,000 - ₹20,000/month",
                    "6-12 shoots per month",
                ],
                scaling: [
                    "Build a portfolio with portraits and small events",
                    "Offer wedding and product photography packages",
                    "Rent a studio and take commercial clients",
                ],
                tools: &["DSLR/Mirrorless Camera", "Lenses", "Lighting Kit", "Editing Software"],
            },
            vec![case_study(
                "Tanvi Shetty",
                "Mangaluru, Karnataka",
                "Photographed friends' events with a second-hand camera.",
                "Shoots 30 weddings a season and runs a small studio.",
            )],
            workforce(
                1,
                &["Photographer", "Editor"],
                [
                    "Shoot and edit on your own",
                    "Outsource editing during wedding season",
                    "Hire a second shooter",
                ],
                &["Back up every shoot twice", "Deliver previews within 48 hours"],
            ),
            MentorSeed {
                id: "mentor_photography_001",
                name: "Ishita Banerjee",
                specialization: &["Wedding Photography", "Studio Business"],
                business_type: BusinessType::Service,
                experience: "12+ years in photography",
                rating: 4.8,
                total_mentees: 90,
                fees: ["₹800/hour", "₹4,500/month", "₹12,000 (3 months)"],
                email: "ishita.banerjee@example.com",
                phone: "+91-9836023456",
                address: ["Bengaluru", "Karnataka", "Indiranagar"],
                mode: MentorMode::Both,
                languages: &["English", "Bengali", "Hindi"],
                bio: "Award-winning wedding photographer who teaches the business side of photography.",
                achievements: &["National wedding photography award", "Published in travel magazines"],
                testimonial: ("Deepa Nair", "Frames by Deepa", "My bookings doubled after fixing my packages."),
            },
        ),
    );

    table.insert(
        "catering".to_string(),
        bundle(
            vec![
                resource("Catering Business Management", "Video Course", "30 hours", "Intermediate"),
                resource("FSSAI Food Safety Supervisor Training", "Government Certification", "1 month", "All Levels"),
            ],
            Financials {
                ranges: [
                    "₹50,000 - ₹2,50,000",
                    "20% - 35%",
                    "6 - 12 months",
                    "₹30,000 - ₹1,50,000",
                    "₹40,000 - ₹1,50,000",
                    "₹10,000 - ₹40,000/month",
                    "4-8 events per month",
                ],
                scaling: [
                    "Cater small parties of up to 50 guests",
                    "Take weddings and corporate lunches",
                    "Set up a central kitchen with fixed staff",
                ],
                tools: &["Bulk Cookware", "Chafing Dishes", "Transport Vehicle", "Serving Equipment"],
            },
            vec![case_study(
                "Fatima Sheikh",
                "Lucknow, Uttar Pradesh",
                "Cooked biryani for neighbourhood functions before launching her catering service.",
                "Caters events of up to 1,000 guests with a team of fifteen.",
            )],
            workforce(
                3,
                &["Head Cook", "Kitchen Helper", "Service Staff"],
                [
                    "Run with a core team and hire servers per event",
                    "Add a second cook for parallel events",
                    "Hire an event manager",
                ],
                &[],
            ),
            MentorSeed {
                id: "mentor_catering_001",
                name: "Kamala Reddy",
                specialization: &["Event Catering", "Kitchen Operations"],
                business_type: BusinessType::Service,
                experience: "17+ years in catering",
                rating: 4.7,
                total_mentees: 50,
                fees: ["₹600/hour", "₹3,500/month", "₹9,000 (3 months)"],
                email: "kamala.reddy@example.com",
                phone: "+91-9848034567",
                address: ["Vijayawada", "Andhra Pradesh", "Benz Circle"],
                mode: MentorMode::Offline,
                languages: &["Telugu", "English"],
                bio: "Runs a large wedding catering business and trains women-led catering teams.",
                achievements: &["Caters 200+ weddings a year", "State catering association member"],
                testimonial: ("Lalitha Rao", "Annapurna Caterers", "Her costing templates made every event profitable."),
            },
        ),
    );

    table.insert(
        "home_bakery".to_string(),
        bundle(
            vec![
                resource("Home Baking Business Course", "Video Course", "20 hours", "Beginner"),
                resource("Cake Decoration Techniques", "Workshop", "1 week", "Intermediate"),
            ],
            Financials {
                ranges: [
                    "₹15,000 - ₹60,000",
                    "35% - 55%",
                    "2 - 6 months",
                    "₹15,000 - ₹70,000",
                    "₹10,000 - ₹45,000",
                    "₹4,000 - ₹12,000/month",
                    "30-60 orders per month",
                ],
                scaling: [
                    "Take birthday cake orders through friends and family",
                    "Add cookies, brownies and festive hampers",
                    "Supply cafes and offer baking classes",
                ],
                tools: &["OTG/Convection Oven", "Stand Mixer", "Baking Tins", "Decoration Tools"],
            },
            vec![case_study(
                "Shreya Kulkarni",
                "Nashik, Maharashtra",
                "Baked cakes for her children's birthdays until neighbours started ordering.",
                "Fulfils 120 custom cake orders a month from her home kitchen.",
            )],
            workforce(
                1,
                &["Baker", "Decorator"],
                [
                    "Bake and decorate on your own",
                    "Hire a helper for festive seasons",
                    "Add a second baker and a delivery partner",
                ],
                &["Batch-prepare bases in advance", "Price by weight and design complexity"],
            ),
            MentorSeed {
                id: "mentor_home_bakery_001",
                name: "Zoya Mirza",
                specialization: &["Custom Cakes", "Bakery Pricing"],
                business_type: BusinessType::Goods,
                experience: "8+ years in baking",
                rating: 4.9,
                total_mentees: 110,
                fees: ["₹400/hour", "₹2,500/month", "₹6,500 (3 months)"],
                email: "zoya.mirza@example.com",
                phone: "+91-9819045678",
                address: ["Mumbai", "Maharashtra", "Bandra"],
                mode: MentorMode::Online,
                languages: &["Hindi", "English", "Urdu"],
                bio: "Home baker turned patisserie owner who teaches cake design and pricing online.",
                achievements: &["Owns a patisserie", "10,000+ online students"],
                testimonial: ("Priyanka Jain", "Sugar Bloom", "Learned to price my cakes properly at last."),
            },
        ),
    );

    table.insert(
        "consulting".to_string(),
        bundle(
            vec![
                resource("Starting a Consulting Practice", "Video Course", "15 hours", "Intermediate"),
                resource("Business Communication and Proposals", "Online Certification", "1 month", "All Levels"),
            ],
            Financials {
                ranges: [
                    "₹10,000 - ₹50,000",
                    "50% - 80%",
                    "2 - 6 months",
                    "₹30,000 - ₹2,00,000",
                    "₹10,000 - ₹40,000",
                    "₹2,000 - ₹10,000/month",
                    "2-4 clients per month",
                ],
                scaling: [
                    "Win first clients through your professional network",
                    "Package services into fixed-price offerings",
                    "Bring in associate consultants",
                ],
                tools: &["Laptop", "Presentation Software", "Video Conferencing", "CRM"],
            },
            vec![case_study(
                "Swati Bhatt",
                "Dehradun, Uttarakhand",
                "Left a corporate finance job to advise local businesses on accounts and compliance.",
                "Serves 25 retainer clients across the state.",
            )],
            workforce(
                1,
                &["Lead Consultant", "Research Associate"],
                [
                    "Deliver all engagements yourself",
                    "Hire a research associate",
                    "Partner with specialist consultants",
                ],
                &["Define a clear niche", "Publish case studies of your results"],
            ),
            MentorSeed {
                id: "mentor_consulting_001",
                name: "Madhavi Iyer",
                specialization: &["Management Consulting", "Small Business Strategy"],
                business_type: BusinessType::Service,
                experience: "20+ years in consulting",
                rating: 4.9,
                total_mentees: 80,
                fees: ["₹1,000/hour", "₹6,000/month", "₹15,000 (3 months)"],
                email: "madhavi.iyer@example.com",
                phone: "+91-9840056789",
                address: ["Chennai", "Tamil Nadu", "Adyar"],
                mode: MentorMode::Online,
                languages: &["Tamil", "English", "Hindi"],
                bio: "Former strategy partner who helps professionals launch independent consulting practices.",
                achievements: &["Partner at a consulting firm", "Mentor at a women's business incubator"],
                testimonial: ("Geeta Menon", "Clarity Advisors", "She helped me land my first three retainers."),
            },
        ),
    );

    table
}
