use rust_decimal::Decimal;

use super::*;
use crate::catalog::criteria::PriceRange;
use crate::catalog::groups::AttributeGroup;
use crate::catalog::test_fixtures::sample_catalog;

fn ids(products: &[&Product]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

fn criteria_with_search(search: &str) -> FilterCriteria {
    FilterCriteria {
        search: search.to_string(),
        ..FilterCriteria::default()
    }
}

#[test]
fn default_criteria_keeps_everything_in_source_order() {
    let catalog = sample_catalog();
    let result = apply_criteria(&catalog, &FilterCriteria::default(), SortKey::Recommended);
    assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn search_shirt_matches_title_case_insensitively_in_source_order() {
    let catalog = sample_catalog();
    let result = apply_criteria(&catalog, &criteria_with_search("shirt"), SortKey::Recommended);
    assert_eq!(ids(&result), vec![2, 5]);
}

#[test]
fn search_matches_description() {
    let catalog = sample_catalog();
    let result = apply_criteria(&catalog, &criteria_with_search("FOREST"), SortKey::Recommended);
    assert_eq!(ids(&result), vec![1]);
}

#[test]
fn search_without_matches_is_empty_not_error() {
    let catalog = sample_catalog();
    let result = apply_criteria(
        &catalog,
        &criteria_with_search("submarine"),
        SortKey::PriceAsc,
    );
    assert!(result.is_empty());
}

#[test]
fn category_filter_requires_membership() {
    let catalog = sample_catalog();
    let mut criteria = FilterCriteria::default();
    criteria.toggle_category("men's clothing");
    let result = apply_criteria(&catalog, &criteria, SortKey::Recommended);
    assert_eq!(ids(&result), vec![1, 2, 3]);

    criteria.toggle_category("electronics");
    let result = apply_criteria(&catalog, &criteria, SortKey::Recommended);
    assert_eq!(ids(&result), vec![1, 2, 3, 6]);
}

#[test]
fn price_range_is_inclusive_on_both_ends() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        price: PriceRange::new(Decimal::from(20), Decimal::from(50)).unwrap(),
        ..FilterCriteria::default()
    };
    let result = apply_criteria(&catalog, &criteria, SortKey::Recommended);
    // 19.99 is excluded, 50.00 is included.
    assert_eq!(ids(&result), vec![2, 6]);
}

#[test]
fn attribute_options_are_ored_within_a_group() {
    let catalog = sample_catalog();
    let mut criteria = FilterCriteria::default();
    criteria
        .attributes
        .toggle(AttributeGroup::Fabric, "Cotton", true);
    criteria.attributes.toggle(AttributeGroup::Fabric, "Silk", true);
    let result = apply_criteria(&catalog, &criteria, SortKey::Recommended);
    assert_eq!(ids(&result), vec![3, 5]);
}

#[test]
fn attribute_groups_are_anded_together() {
    let catalog = sample_catalog();
    let mut criteria = FilterCriteria::default();
    criteria
        .attributes
        .toggle(AttributeGroup::Fabric, "Cotton", true);
    criteria
        .attributes
        .toggle(AttributeGroup::SuitableFor, "Winter", true);
    let result = apply_criteria(&catalog, &criteria, SortKey::Recommended);
    assert_eq!(ids(&result), vec![3]);

    criteria
        .attributes
        .toggle(AttributeGroup::SuitableFor, "Winter", false);
    criteria
        .attributes
        .toggle(AttributeGroup::Occasion, "Casual", true);
    let result = apply_criteria(&catalog, &criteria, SortKey::Recommended);
    assert_eq!(ids(&result), vec![5]);
}

#[test]
fn attribute_labels_match_as_plain_substrings() {
    // "Men" also appears inside "Women's" and "Elements".
    let catalog = sample_catalog();
    let mut criteria = FilterCriteria::default();
    criteria.attributes.toggle(AttributeGroup::IdealFor, "Men", true);
    let result = apply_criteria(&catalog, &criteria, SortKey::Recommended);
    assert_eq!(ids(&result), vec![2, 3, 4, 5, 6]);
}

#[test]
fn empty_attribute_groups_impose_no_constraint() {
    let catalog = sample_catalog();
    let mut criteria = FilterCriteria::default();
    for group in AttributeGroup::ALL {
        criteria.attributes.select_all(group);
        criteria.attributes.clear_group(group);
    }
    let result = apply_criteria(&catalog, &criteria, SortKey::Recommended);
    assert_eq!(result.len(), catalog.len());
}

#[test]
fn combined_predicates_all_apply() {
    let catalog = sample_catalog();
    let mut criteria = criteria_with_search("cotton");
    criteria.toggle_category("women's clothing");
    let result = apply_criteria(&catalog, &criteria, SortKey::Recommended);
    assert_eq!(ids(&result), vec![5]);
}

#[test]
fn price_sorts_are_exact_reverses_without_ties() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria::default();
    let asc = ids(&apply_criteria(&catalog, &criteria, SortKey::PriceAsc));
    let mut desc = ids(&apply_criteria(&catalog, &criteria, SortKey::PriceDesc));
    assert_eq!(asc, vec![5, 2, 6, 3, 1, 4]);
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn filtering_is_idempotent() {
    let catalog = sample_catalog();
    let mut criteria = criteria_with_search("t");
    criteria.attributes.toggle(AttributeGroup::IdealFor, "Men", true);

    let first: Vec<Product> = apply_criteria(&catalog, &criteria, SortKey::RatingDesc)
        .into_iter()
        .cloned()
        .collect();
    let second = apply_criteria(&first, &criteria, SortKey::RatingDesc);
    assert_eq!(ids(&second), first.iter().map(|p| p.id).collect::<Vec<_>>());
}

#[test]
fn result_membership_agrees_with_matches() {
    let catalog = sample_catalog();
    let mut criteria = criteria_with_search("s");
    criteria.price = PriceRange::new(Decimal::from(15), Decimal::from(600)).unwrap();
    criteria.attributes.toggle(AttributeGroup::IdealFor, "Women", true);

    let result = ids(&apply_criteria(&catalog, &criteria, SortKey::Recommended));
    for product in &catalog {
        assert_eq!(
            result.contains(&product.id),
            matches(product, &criteria),
            "membership mismatch for product {}",
            product.id
        );
    }
}

#[test]
fn source_list_is_not_modified() {
    let catalog = sample_catalog();
    let before = catalog.clone();
    let _ = apply_criteria(&catalog, &criteria_with_search("a"), SortKey::NameAsc);
    assert_eq!(catalog, before);
}
