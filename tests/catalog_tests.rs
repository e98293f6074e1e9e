//! Integration tests for catalog filtering over the sample courses

use eljunior::core::catalog::{
    filter_courses, Catalog, CatalogSource, CourseFilter, SampleCatalog, Selection, TomlCatalog,
};
use eljunior::core::models::{Category, CategorySelector, Course};
use std::collections::HashSet;
use tempfile::TempDir;

fn sample() -> Catalog {
    Catalog::from_source(&SampleCatalog).expect("sample catalog is valid")
}

fn ids(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.id.to_string()).collect()
}

fn run(selector: CategorySelector, query: &str) -> Vec<String> {
    let catalog = sample();
    ids(&catalog.filter(&CourseFilter::new(selector, query)))
}

fn all_selectors() -> Vec<CategorySelector> {
    std::iter::once(CategorySelector::All)
        .chain(Category::ALL.iter().copied().map(CategorySelector::Only))
        .collect()
}

const QUERIES: [&str; 9] = ["", "python", "PYTHON", "Иван", "дизайн", "ова", "о", " ", "нет такого"];

#[test]
fn all_categories_empty_query_returns_everything_in_order() {
    assert_eq!(run(CategorySelector::All, ""), ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn category_only_keeps_order() {
    assert_eq!(run(Category::Programming.into(), ""), ["1", "3"]);
}

#[test]
fn latin_query_matches_latin_title_literally() {
    // "Python для начинающих" contains the Latin word, so it is found
    assert_eq!(run(CategorySelector::All, "python"), ["1"]);
    // No transliteration: the Cyrillic spelling does not match
    assert!(run(CategorySelector::All, "питон").is_empty());
}

#[test]
fn query_matches_instructor() {
    // Only course 1 has "Петров" anywhere, and only as its instructor
    assert_eq!(run(CategorySelector::All, "петров"), ["1"]);
    // "Иван" is also a substring of course 2's "Мария Иванова"
    assert_eq!(run(CategorySelector::All, "Иван"), ["1", "2"]);
}

#[test]
fn category_and_cyrillic_query_combine() {
    assert_eq!(run(Category::Design.into(), "дизайн"), ["2"]);
}

#[test]
fn category_excludes_text_match() {
    assert!(run(Category::Math.into(), "python").is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let catalog = sample();
    for selector in all_selectors() {
        for query in QUERIES {
            let filter = CourseFilter::new(selector, query);
            assert_eq!(
                ids(&catalog.filter(&filter)),
                ids(&catalog.filter(&filter)),
                "{selector} / {query:?}"
            );
        }
    }
}

#[test]
fn all_is_superset_of_every_category() {
    for query in QUERIES {
        let everything: HashSet<_> = run(CategorySelector::All, query).into_iter().collect();
        for selector in all_selectors() {
            let subset: HashSet<_> = run(selector, query).into_iter().collect();
            assert!(subset.is_subset(&everything), "{selector} / {query:?}");
        }
    }
}

#[test]
fn categories_partition_the_unfiltered_catalog() {
    let total: usize = Category::ALL
        .iter()
        .map(|c| run(CategorySelector::Only(*c), "").len())
        .sum();
    assert_eq!(total, sample().len());
}

#[test]
fn results_are_subsequences_of_the_source() {
    let source: Vec<String> = sample().courses().iter().map(|c| c.id.to_string()).collect();
    for selector in all_selectors() {
        for query in QUERIES {
            let result = run(selector, query);
            let mut remaining = source.iter();
            for id in &result {
                assert!(
                    remaining.any(|s| s == id),
                    "{id} out of order for {selector} / {query:?}"
                );
            }
        }
    }
}

#[test]
fn query_case_does_not_matter() {
    for selector in all_selectors() {
        assert_eq!(run(selector, "python"), run(selector, "PYTHON"));
        assert_eq!(run(selector, "ИВАН"), run(selector, "иван"));
    }
}

#[test]
fn missing_fields_are_searched_as_empty() {
    let courses = vec![
        Course::new("a", "", Category::Business, ""),
        Course::new("b", "Финансы", Category::Business, "Ольга Ким"),
    ];
    let kept = filter_courses(&courses, CategorySelector::All, "ким");
    assert_eq!(ids(&kept), ["b"]);
    assert_eq!(filter_courses(&courses, CategorySelector::All, "").len(), 2);
}

#[test]
fn selection_drives_the_filter() {
    let catalog = sample();
    let mut selection = Selection::new();
    assert_eq!(selection.visible(&catalog).len(), 6);

    selection.set_category(Category::Programming.into());
    selection.set_query("java");
    assert_eq!(ids(&selection.visible(&catalog)), ["3"]);

    selection.clear_query();
    assert_eq!(ids(&selection.visible(&catalog)), ["1", "3"]);

    selection.reset();
    assert_eq!(selection, Selection::new());
}

#[test]
fn toml_catalog_file_round_trip_through_disk() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("catalog.toml");

    let file = eljunior::core::catalog::source::snapshot(&SampleCatalog).unwrap();
    TomlCatalog::write(&file, &path).expect("Failed to write catalog");

    let loaded = TomlCatalog::open(&path).expect("Failed to open catalog");
    let catalog = Catalog::from_source(&loaded).unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(
        ids(&catalog.filter(&CourseFilter::new(Category::Design.into(), "дизайн"))),
        ["2"]
    );
    assert_eq!(loaded.featured().unwrap().len(), 3);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = TomlCatalog::parse(
        r#"
[[courses]]
id = "1"
category = "math"

[[courses]]
id = "1"
category = "design"
"#,
        "dup.toml",
    )
    .and_then(|source| Catalog::from_source(&source));
    assert!(err.is_err());
}

#[test]
fn unknown_category_in_file_is_a_parse_error() {
    let result = TomlCatalog::parse("[[courses]]\nid = \"1\"\ncategory = \"cooking\"\n", "bad.toml");
    assert!(result.is_err());
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = TomlCatalog::open(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(eljunior::core::catalog::CatalogError::Io { .. })
    ));
}
