/// Skill clusters whose members count as semantic synonyms of each other.
///
/// All entries are lowercase. A term may appear in more than one cluster.
pub const SYNONYM_CLUSTERS: &[&[&str]] = &[
    &["sewing", "stitching", "tailoring", "garment making", "needle work", "embroidery", "fashion design"],
    &["cooking", "culinary", "food preparation", "catering", "baking", "recipe development", "food service", "menu planning"],
    &["art", "craft", "art & craft", "handicrafts", "handmade", "traditional arts", "pottery", "woodwork", "craftsmanship"],
    &["teaching", "tutoring", "education", "training", "mentoring", "coaching", "academic", "subject expertise"],
    &["beauty", "makeup", "beauty & makeup", "hair styling", "skincare", "aesthetics", "cosmetology"],
    &["technology", "digital marketing", "e-commerce", "social media", "content creation", "online", "analytics"],
    &["jewelry", "jewelry making", "jewelry design", "metalwork", "beading"],
    &["childcare", "child care", "babysitting", "daycare", "activity planning"],
    &["event planning", "event management", "organization", "coordination", "vendor management", "planning"],
    &["photography", "camera", "editing", "videography"],
    &["sales", "retail", "visual merchandising", "customer service"],
    &["consulting", "business knowledge", "management", "analysis", "problem solving", "accounting"],
];

/// True when both terms belong to a common cluster
pub fn are_synonyms(a: &str, b: &str) -> bool {
    SYNONYM_CLUSTERS
        .iter()
        .any(|cluster| cluster.contains(&a) && cluster.contains(&b))
}
