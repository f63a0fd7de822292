use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a course.
pub type CourseId = Uuid;

/// Default par assigned to every hole when a course is created without
/// explicit pars.
pub const DEFAULT_PAR: u32 = 3;

/// A mini-golf course: a named, ordered sequence of holes with pars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub number_of_holes: u32,
    /// One par per hole, index 0 = hole 1. Expected to match
    /// `number_of_holes` in length; readers must tolerate a shorter list.
    pub par_per_hole: Vec<u32>,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Create a course with every hole at the default par.
    pub fn new(name: impl Into<String>, number_of_holes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            number_of_holes,
            par_per_hole: vec![DEFAULT_PAR; number_of_holes as usize],
            created_at: Utc::now(),
        }
    }

    /// Replace the par sequence. The list should have `number_of_holes`
    /// entries; a mismatched length is tolerated by `par_for_hole`.
    pub fn with_pars(mut self, pars: Vec<u32>) -> Self {
        self.par_per_hole = pars;
        self
    }

    /// Par for a 1-based hole number. Returns `None` when the hole is out of
    /// range or the par list is shorter than the hole count, rather than
    /// panicking on a malformed course.
    pub fn par_for_hole(&self, hole: u32) -> Option<u32> {
        if hole == 0 || hole > self.number_of_holes {
            return None;
        }
        self.par_per_hole.get(hole as usize - 1).copied()
    }

    /// Total par across all holes.
    pub fn total_par(&self) -> u32 {
        self.par_per_hole.iter().sum()
    }
}

/// A set of courses available for new games, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCatalog {
    pub courses: Vec<Course>,
}

/// On-disk catalog schema. Ids and timestamps are assigned at load time so
/// catalog files stay hand-editable.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    courses: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    holes: u32,
    pars: Option<Vec<u32>>,
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self {
            courses: seed_courses(),
        }
    }
}

impl CourseCatalog {
    /// Load the catalog from the `SCORECARD_COURSES` env var path, then
    /// `config/courses.toml`, falling back to the built-in seed courses.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("SCORECARD_COURSES")
            && let Ok(contents) = std::fs::read_to_string(&path)
            && let Ok(catalog) = Self::from_toml(&contents)
        {
            return catalog;
        }
        if let Ok(contents) = std::fs::read_to_string("config/courses.toml")
            && let Ok(catalog) = Self::from_toml(&contents)
        {
            return catalog;
        }
        Self::default()
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        let file: CatalogFile = toml::from_str(contents)?;
        let courses = file
            .courses
            .into_iter()
            .map(|entry| {
                let course = Course::new(entry.name, entry.holes);
                match entry.pars {
                    Some(pars) => course.with_pars(pars),
                    None => course,
                }
            })
            .collect();
        Ok(Self { courses })
    }
}

/// Built-in starter courses.
fn seed_courses() -> Vec<Course> {
    vec![
        Course::new("Sunny Greens Mini Golf", 18),
        Course::new("Pirate's Cove", 18)
            .with_pars(vec![2, 3, 3, 4, 2, 3, 3, 2, 4, 3, 2, 3, 4, 3, 2, 3, 3, 4]),
        Course::new("Windmill Park", 9).with_pars(vec![3, 2, 3, 4, 3, 2, 3, 3, 4]),
    ]
}
