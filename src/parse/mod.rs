pub mod manifest_parser;

pub use manifest_parser::{MalformedLine, ManifestPath, ParsedManifest, parse_manifest};
