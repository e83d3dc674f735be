// Templates Tests - Testing the template catalog and filters

use crate::templates::{
    TemplateCategory, TemplateFilter, catalog, conversation_for, filter, find,
};

#[test]
fn test_catalog_has_unique_ids() {
    let mut ids: Vec<u32> = catalog().iter().map(|t| t.id).collect();
    let len = ids.len();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), len, "Template ids must be unique");
    assert_eq!(len, 8);
}

#[test]
fn test_filter_all_returns_catalog() {
    assert_eq!(filter(TemplateFilter::All), catalog().to_vec());
}

#[test]
fn test_filter_by_category() {
    let business = filter(TemplateFilter::Only(TemplateCategory::Business));
    let names: Vec<&str> = business.iter().map(|t| t.name).collect();

    assert_eq!(names, vec!["Business Deal", "Tech Support", "Group Project"]);
    assert_eq!(filter(TemplateFilter::Only(TemplateCategory::Social)).len(), 1);
}

#[test]
fn test_every_filter_is_a_subset() {
    for f in TemplateFilter::all() {
        for template in filter(f) {
            assert!(f.matches(&template));
            assert!(catalog().contains(&template));
        }
    }
    assert_eq!(TemplateFilter::all().len(), 6);
    assert_eq!(TemplateFilter::All.label(), "all");
    assert_eq!(TemplateFilter::Only(TemplateCategory::Drama).label(), "drama");
}

#[test]
fn test_find() {
    assert_eq!(find(3).map(|t| t.name), Some("Dating App"));
    assert!(find(0).is_none());
    assert!(find(99).is_none());
}

#[test]
fn test_conversation_uses_names() {
    let text = conversation_for(1, "John", "Me").expect("template 1 exists");
    let first_line = text.lines().next().expect("first line");

    assert_eq!(first_line, "Me: Hi John, do you have a minute to discuss the Q3 projections?");
    assert!(text.contains("\nJohn: Sure, I just finished reviewing the numbers."));
}

#[test]
fn test_conversation_fallback_script() {
    let fallback = conversation_for(7, "Sam", "You").expect("template 7 exists");

    assert_eq!(fallback, conversation_for(1, "Sam", "You").expect("template 1 exists"));
}

#[test]
fn test_conversation_unknown_template() {
    assert!(conversation_for(42, "Sam", "You").is_none());
}
