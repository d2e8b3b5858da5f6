use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub scenario: Vec<Scenario>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub mode: String,
    /// Set when constructing the heap must fail with this message fragment.
    #[serde(default)]
    pub error: Option<String>,
    /// Pairs inserted before any merge or op runs.
    #[serde(default)]
    pub initial: Vec<(i64, String)>,
    #[serde(default)]
    pub ops: Vec<Op>,
    /// Heap drained into the main heap via merge before `ops` run.
    #[serde(default)]
    pub merge_with: Option<MergeOperand>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeOperand {
    pub mode: String,
    pub inserts: Vec<(i64, String)>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Insert { weight: i64, payload: String },
    Extract { weight: i64, payload: String },
    ExtractEmpty,
    Peek { index: usize, weight: i64, payload: String },
    PeekEmpty { index: usize },
    Size { expect: usize },
    Remove { payload: String, weight: i64 },
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn load_scenarios(file: &str) -> ScenarioFile {
    let path = fixtures_dir().join(file);
    let text = fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {:?}: {e}", path));
    toml::from_str(&text).unwrap_or_else(|e| panic!("failed to parse {:?}: {e}", path))
}
