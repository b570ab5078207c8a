use super::*;
use neudev::types::ActivityDraft;

#[test]
fn json_arg_parses_inline_body() {
    let draft: ActivityDraft = json_arg(r#"{"actTitle":"Loops","classID":4}"#).unwrap();
    assert_eq!(draft.act_title.as_deref(), Some("Loops"));
    assert_eq!(draft.class_id, Some(4));
}

#[test]
fn json_arg_reads_at_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), r#"{"actTitle":"From file"}"#).unwrap();

    let draft: ActivityDraft = json_arg(&format!("@{}", file.path().display())).unwrap();
    assert_eq!(draft.act_title.as_deref(), Some("From file"));
}

#[test]
fn json_arg_reports_missing_file_and_bad_json() {
    let missing = json_arg::<ActivityDraft>("@/definitely/not/here.json").unwrap_err();
    assert!(matches!(missing, CliError::ReadFile { .. }));

    let bad = json_arg::<ActivityDraft>("{nope").unwrap_err();
    assert!(matches!(bad, CliError::InvalidJson(_)));
}

#[test]
fn image_file_guesses_mime_from_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("avatar.PNG");
    std::fs::write(&path, [1_u8, 2, 3]).unwrap();

    let image = image_file(&path).unwrap();
    assert_eq!(image.mime.as_deref(), Some("image/png"));
    assert_eq!(image.bytes, vec![1, 2, 3]);
    assert_eq!(image.file_name, "avatar.PNG");
}

#[test]
fn unknown_extension_has_no_mime() {
    assert_eq!(image_mime(Path::new("notes.txt")), None);
    assert_eq!(image_mime(Path::new("photo.jpeg")), Some("image/jpeg"));
}
