mod common;

use aw_resolver::services::access_widener::{find_mod_archives, resolve_all, unique_artifacts};
use aw_resolver::{
    resolve_access_widener, AccessWidenerResolver, ErrorKind, ResolvedArtifact, ResolverConfig,
};
use common::create_mod_jar;
use std::collections::HashSet;
use tempfile::TempDir;

const AW: &[u8] = b"accessWidener\tv2\tnamed\n";

#[test]
fn test_fabric_round_trip() {
    let dir = TempDir::new().unwrap();
    let jar = create_mod_jar(
        dir.path(),
        "examplemod-1.0.jar",
        &[
            (
                "fabric.mod.json",
                br#"{"accessWidener": "data/aw.txt", "id": "examplemod"}"#,
            ),
            ("data/aw.txt", AW),
        ],
    );

    let artifact = resolve_access_widener(&jar).unwrap().unwrap();
    assert_eq!(artifact.declared_path(), "data/aw.txt");
    assert_eq!(artifact.owner_id(), "examplemod");
    assert_eq!(artifact.content(), AW);
    assert_eq!(artifact.content_str(), Some("accessWidener\tv2\tnamed\n"));
}

#[test]
fn test_archive_without_descriptors_is_absent() {
    let dir = TempDir::new().unwrap();
    let jar = create_mod_jar(
        dir.path(),
        "library.jar",
        &[("com/example/Lib.class", b"\xCA\xFE\xBA\xBE")],
    );

    assert!(resolve_access_widener(&jar).unwrap().is_none());
}

#[test]
fn test_fabric_without_field_ignores_other_descriptors() {
    let dir = TempDir::new().unwrap();
    let jar = create_mod_jar(
        dir.path(),
        "multiloader.jar",
        &[
            ("fabric.mod.json", br#"{"id": "multiloader"}"#),
            ("architectury.common.json", br#"{"accessWidener": "common.aw"}"#),
            ("quilt.mod.json", br#"{"access_widener": "quilt.aw"}"#),
            ("common.aw", AW),
            ("quilt.aw", AW),
        ],
    );

    assert!(resolve_access_widener(&jar).unwrap().is_none());
}

#[test]
fn test_quilt_two_element_list_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let jar = create_mod_jar(
        dir.path(),
        "quiltmod.jar",
        &[
            ("quilt.mod.json", br#"{"access_widener": ["a.aw", "b.aw"]}"#),
            ("a.aw", AW),
            ("b.aw", AW),
        ],
    );

    let err = resolve_access_widener(&jar).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedDeclaration);
}

#[test]
fn test_architectury_declared_artifact_missing() {
    let dir = TempDir::new().unwrap();
    let jar = create_mod_jar(
        dir.path(),
        "common.jar",
        &[("architectury.common.json", br#"{"accessWidener": "common.aw"}"#)],
    );

    let err = resolve_access_widener(&jar).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.is_missing_entry());
}

#[test]
fn test_owner_id_source_per_schema() {
    let dir = TempDir::new().unwrap();
    let architectury = create_mod_jar(
        dir.path(),
        "arch-common-2.1.jar",
        &[
            ("architectury.common.json", br#"{"accessWidener": "arch.aw"}"#),
            ("arch.aw", AW),
        ],
    );
    let quilt = create_mod_jar(
        dir.path(),
        "quilted-0.9.jar",
        &[
            ("quilt.mod.json", br#"{"access_widener": ["quilted.aw"]}"#),
            ("quilted.aw", AW),
        ],
    );

    let resolver = AccessWidenerResolver::new(&ResolverConfig::default());
    let arch = resolver.resolve(&architectury).unwrap().unwrap();
    assert_eq!(arch.owner_id(), "arch-common-2.1.jar");
    let quilt = resolver.resolve(&quilt).unwrap().unwrap();
    assert_eq!(quilt.owner_id(), "quilted-0.9.jar");
}

#[test]
fn test_equal_artifacts_hash_equal() {
    let a = ResolvedArtifact::new("aw.txt".into(), "mod".into(), AW.to_vec());
    let b = ResolvedArtifact::new("aw.txt".into(), "mod".into(), AW.to_vec());
    let c = ResolvedArtifact::new("aw.txt".into(), "other".into(), AW.to_vec());

    let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&a));
}

#[test]
fn test_mods_directory_end_to_end() {
    let dir = TempDir::new().unwrap();
    let mods = dir.path().join("mods");
    std::fs::create_dir(&mods).unwrap();

    create_mod_jar(
        &mods,
        "a.jar",
        &[
            ("fabric.mod.json", br#"{"id": "a", "accessWidener": "a.aw"}"#),
            ("a.aw", AW),
        ],
    );
    create_mod_jar(&mods, "b.jar", &[("fabric.mod.json", br#"{"id": "b"}"#)]);
    create_mod_jar(&mods, "broken.jar", &[("fabric.mod.json", b"{")]);

    let config = ResolverConfig::default();
    let archives = find_mod_archives(&mods, &config).unwrap();
    assert_eq!(archives.len(), 3);

    let results = resolve_all(&AccessWidenerResolver::new(&config), &archives);
    let failures: Vec<_> = results.iter().filter(|r| r.result.is_err()).collect();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].archive.ends_with("broken.jar"));

    let unique = unique_artifacts(&results);
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].owner_id(), "a");
}
