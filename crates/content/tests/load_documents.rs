use std::fs;

use folio_content::{ContentError, ContentSource, ContentStore};
use folio_types::{ContactKind, NavigationConfig};

#[test]
fn json_fixture_loads_with_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/minimal.json");
    let store = ContentStore::from_path(path).expect("load json fixture");
    assert!(matches!(store.source(), ContentSource::File(_)));
    assert_eq!(store.profile().name, "Ada Lovelace");
    assert!(store.contacts().is_empty());
    assert!(store.experience().is_empty());
    assert_eq!(store.projects().len(), 1);
    assert!(store.projects()[0].link.is_none(), "absent link stays absent");
    assert!(store.technologies().tools.tags.is_empty());
    assert_eq!(store.navigation(), &NavigationConfig::default());
}

#[test]
fn yaml_file_is_validated_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portfolio.yaml");
    let yaml = r#"
profile:
  name: Grace
  headline: Rear Admiral
  summary: Compilers.
  site_title: Grace's Portfolio
contacts:
  - kind: email
    label: grace@example.com
    href: grace@example.com
technologies:
  languages: { title: Languages, list_label: Languages, tags: [COBOL] }
  frameworks: { title: Frameworks, list_label: Frameworks }
  tools: { title: Tools, list_label: Tools }
"#;
    fs::write(&path, yaml).expect("write yaml");

    let err = ContentStore::from_path(&path).unwrap_err();
    match err {
        ContentError::Invalid { field, reason } => {
            assert_eq!(field, "contacts[0].href");
            assert!(reason.contains("not a URL"), "reason: {reason}");
        }
        other => panic!("expected invalid content, got {other}"),
    }
}

#[test]
fn embedded_document_covers_every_contact_kind() {
    let store = ContentStore::embedded().expect("embedded content");
    let kinds: Vec<_> = store.contacts().iter().map(|c| c.kind).collect();
    for kind in [ContactKind::CodeHost, ContactKind::ProfessionalNetwork, ContactKind::Email, ContactKind::Phone] {
        assert!(kinds.contains(&kind), "missing {kind:?}");
    }
    let new_tab: Vec<_> = store.contacts().iter().filter(|c| c.opens_in_new_tab()).collect();
    assert_eq!(new_tab.len(), 2);
}

#[test]
fn embedded_document_matches_page_structure() {
    let store = ContentStore::embedded().expect("embedded content");
    assert_eq!(store.experience().len(), 3);
    assert_eq!(store.experience()[0].organization, "Immigration, Refugees and Citizenship Canada");
    assert_eq!(store.projects().iter().filter(|p| p.link.is_some()).count(), 2);
    assert_eq!(store.education().len(), 2);
    assert_eq!(store.technologies().languages.tags.len(), 6);
    assert_eq!(store.technologies().frameworks.title, "Frameworks & Tools");
    assert!(store.technologies().languages.tags.iter().any(|t| t == "C#"));
}
