pub mod peek;

/// Snapshot a rendered string with `insta`, recording the source text it was
/// produced from in the snapshot metadata.
///
/// The calling crate needs `insta` in its (dev-)dependencies.
#[macro_export]
macro_rules! assert_snapshot_with_source {
    ($source:expr => $output:expr) => {{
        insta::with_settings!({
            info => &$source,
            omit_expression => true,
        }, {
            insta::assert_snapshot!($output);
        })
    }};
}

/// Like [`assert_snapshot_with_source!`], for a serializable value written
/// out as YAML.
#[macro_export]
macro_rules! assert_yaml_snapshot_with_source {
    ($source:expr => $output:expr) => {{
        insta::with_settings!({
            info => &$source,
            omit_expression => true,
        }, {
            insta::assert_yaml_snapshot!($output);
        })
    }};
}
