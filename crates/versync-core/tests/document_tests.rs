//! Tests for manifest parsing and in-place version edits

use pretty_assertions::assert_eq;
use versync_core::{Error, ManifestDocument, Schema};

const LEGACY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<packages>
  <package id="Newtonsoft.Json" version="12.0.3" targetFramework="net472" />
  <package id="NLog" version="4.7.0" targetFramework="net472" />
</packages>
"#;

const MODERN: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json" Version="13.0.1" />
    <PackageReference Include="Serilog">
      <Version>2.10.0</Version>
    </PackageReference>
  </ItemGroup>
</Project>
"#;

#[test]
fn legacy_parse_extracts_ids_and_versions_in_order() {
    let doc = ManifestDocument::from_source(LEGACY.to_string(), "packages.config").unwrap();
    assert_eq!(doc.schema(), Schema::Legacy);

    let ids: Vec<&str> = doc.packages().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["Newtonsoft.Json", "NLog"]);
    assert_eq!(doc.packages().get("NLog").unwrap().version, "4.7.0");
    assert!(!doc.is_modified());
}

#[test]
fn modern_parse_reads_attribute_and_nested_element() {
    let doc = ManifestDocument::from_source(MODERN.to_string(), "app.csproj").unwrap();
    assert_eq!(doc.schema(), Schema::Modern);
    assert_eq!(doc.packages().get("Newtonsoft.Json").unwrap().version, "13.0.1");
    assert_eq!(doc.packages().get("Serilog").unwrap().version, "2.10.0");
}

#[test]
fn nested_version_element_wins_over_attribute() {
    let source = r#"<Project>
  <ItemGroup>
    <PackageReference Include="Dapper" Version="1.0.0">
      <Version>2.0.30</Version>
    </PackageReference>
  </ItemGroup>
</Project>
"#;
    let mut doc = ManifestDocument::from_source(source.to_string(), "app.csproj").unwrap();
    assert_eq!(doc.packages().get("Dapper").unwrap().version, "2.0.30");

    // The edit lands on the element text; the stale attribute is untouched.
    doc.set_version("Dapper", "2.0.90").unwrap();
    assert!(doc.source().contains("<Version>2.0.90</Version>"));
    assert!(doc.source().contains(r#"Version="1.0.0""#));
}

#[test]
fn empty_nested_version_falls_back_to_attribute() {
    let source = r#"<Project>
  <ItemGroup>
    <PackageReference Include="Bar" Version="1.1.0"><Version></Version></PackageReference>
  </ItemGroup>
</Project>
"#;
    let doc = ManifestDocument::from_source(source.to_string(), "app.csproj").unwrap();
    assert_eq!(doc.packages().get("Bar").unwrap().version, "1.1.0");
}

#[test]
fn namespaced_project_parses_by_local_name() {
    let source = r#"<Project ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <PackageReference Include="NLog">
      <Version>4.7.0</Version>
    </PackageReference>
  </ItemGroup>
</Project>
"#;
    let doc = ManifestDocument::from_source(source.to_string(), "old.csproj").unwrap();
    assert_eq!(doc.schema(), Schema::Modern);
    assert_eq!(doc.packages().get("NLog").unwrap().version, "4.7.0");
}

#[test]
fn missing_version_is_an_error() {
    let source = r#"<Project>
  <ItemGroup>
    <PackageReference Include="Foo" />
  </ItemGroup>
</Project>
"#;
    let err = ManifestDocument::from_source(source.to_string(), "app.csproj").unwrap_err();
    match err {
        Error::MissingVersion { id, .. } => assert_eq!(id, "Foo"),
        other => panic!("expected MissingVersion, got {other:?}"),
    }
}

#[test]
fn duplicate_id_is_an_error() {
    let source = r#"<packages>
  <package id="A" version="1.0" />
  <package id="A" version="2.0" />
</packages>
"#;
    let err = ManifestDocument::from_source(source.to_string(), "packages.config").unwrap_err();
    match err {
        Error::DuplicateId { id, .. } => assert_eq!(id, "A"),
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn unrecognized_root_is_a_schema_error() {
    let err =
        ManifestDocument::from_source("<Stuff/>".to_string(), "stuff.xml").unwrap_err();
    assert!(matches!(err, Error::Schema { .. }));
}

#[test]
fn malformed_xml_is_a_parse_error() {
    let err = ManifestDocument::from_source(
        "<packages><package id=\"A\"".to_string(),
        "broken.config",
    )
    .unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn set_version_preserves_all_other_bytes() {
    let source = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- pinned versions -->
<packages>
  <package id="A" version="1.0" targetFramework="net48" />
  <package id="B" version="2.0" />
</packages>
"#;
    let mut doc = ManifestDocument::from_source(source.to_string(), "packages.config").unwrap();

    doc.set_version("A", "10.55.100").unwrap();
    doc.set_version("B", "3.0").unwrap();

    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- pinned versions -->
<packages>
  <package id="A" version="10.55.100" targetFramework="net48" />
  <package id="B" version="3.0" />
</packages>
"#;
    assert_eq!(doc.source(), expected);
    assert!(doc.is_modified());
    assert_eq!(doc.packages().get("A").unwrap().version, "10.55.100");
    assert_eq!(doc.packages().get("B").unwrap().version, "3.0");
}

#[test]
fn setting_the_same_version_is_a_no_op() {
    let mut doc = ManifestDocument::from_source(LEGACY.to_string(), "packages.config").unwrap();
    doc.set_version("NLog", "4.7.0").unwrap();
    assert!(!doc.is_modified());
    assert_eq!(doc.source(), LEGACY);
}

#[test]
fn set_version_on_unknown_id_fails() {
    let mut doc = ManifestDocument::from_source(LEGACY.to_string(), "packages.config").unwrap();
    assert!(matches!(
        doc.set_version("Nope", "1.0"),
        Err(Error::PackageNotFound { .. })
    ));
}
