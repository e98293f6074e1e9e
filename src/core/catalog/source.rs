//! Catalog sources: where course records come from
//!
//! Screens receive a [`CatalogSource`] at construction time, so the built-in
//! sample records can be swapped for a file (or a real content service)
//! without touching the filter.

use super::CatalogError;
use crate::core::models::{Category, Course, Level};
use crate::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Provider of course records
pub trait CatalogSource {
    /// Full catalog, in display order
    ///
    /// # Errors
    /// Returns an error if the records cannot be produced
    fn courses(&self) -> Result<Vec<Course>, CatalogError>;

    /// Courses promoted on the home screen
    ///
    /// # Errors
    /// Returns an error if the records cannot be produced
    fn featured(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(Vec::new())
    }

    /// Short description for log messages
    fn describe(&self) -> String;
}

/// Built-in demo records
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl SampleCatalog {
    fn catalog_courses() -> Vec<Course> {
        vec![
            Course::new("1", "Python для начинающих", Category::Programming, "Иван Петров")
                .with_duration("8 недель")
                .with_stats(4.8, 1234)
                .with_level(Level::Beginner)
                .with_price("Бесплатно")
                .with_thumbnail("https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=400"),
            Course::new("2", "UI/UX Дизайн с нуля", Category::Design, "Мария Иванова")
                .with_duration("6 недель")
                .with_stats(4.9, 856)
                .with_level(Level::Beginner)
                .with_price("₸15,000")
                .with_thumbnail("https://images.unsplash.com/photo-1561070791-2526d30994b5?w=400"),
            Course::new(
                "3",
                "JavaScript от основ до продвинутого",
                Category::Programming,
                "Алексей Смирнов",
            )
            .with_duration("12 недель")
            .with_stats(4.9, 2341)
            .with_level(Level::Intermediate)
            .with_price("₸25,000")
            .with_thumbnail("https://images.unsplash.com/photo-1579468118864-1b9ea3c0db4a?w=400"),
            Course::new("4", "Высшая математика", Category::Math, "Дмитрий Козлов")
                .with_duration("10 недель")
                .with_stats(4.7, 567)
                .with_level(Level::Advanced)
                .with_price("₸20,000")
                .with_thumbnail("https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=400"),
            Course::new("5", "Английский язык B2", Category::Languages, "Елена Соколова")
                .with_duration("16 недель")
                .with_stats(4.8, 1892)
                .with_level(Level::Intermediate)
                .with_price("₸30,000")
                .with_thumbnail("https://images.unsplash.com/photo-1546410531-bb4caa6b424d?w=400"),
            Course::new("6", "Основы маркетинга", Category::Business, "Анна Волкова")
                .with_duration("5 недель")
                .with_stats(4.6, 743)
                .with_level(Level::Beginner)
                .with_price("₸18,000")
                .with_thumbnail("https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400"),
        ]
    }

    fn featured_courses() -> Vec<Course> {
        vec![
            Course::new(
                "1",
                "Основы программирования на Python",
                Category::Programming,
                "Иван Петров",
            )
            .with_duration("8 недель")
            .with_stats(4.8, 1234)
            .with_thumbnail("https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=400"),
            Course::new(
                "2",
                "Веб-разработка: HTML, CSS, JavaScript",
                Category::WebDevelopment,
                "Анна Смирнова",
            )
            .with_duration("10 недель")
            .with_stats(4.9, 2156)
            .with_thumbnail("https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400"),
            Course::new(
                "3",
                "Математика для программистов",
                Category::Math,
                "Дмитрий Козлов",
            )
            .with_duration("6 недель")
            .with_stats(4.7, 892)
            .with_thumbnail("https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=400"),
        ]
    }
}

impl CatalogSource for SampleCatalog {
    fn courses(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(Self::catalog_courses())
    }

    fn featured(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(Self::featured_courses())
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}

/// On-disk layout of a catalog file
///
/// ```toml
/// [[courses]]
/// id = "1"
/// title = "Python для начинающих"
/// category = "programming"
/// instructor = "Иван Петров"
/// level = "beginner"
///
/// [[featured]]
/// id = "1"
/// title = "Основы программирования на Python"
/// category = "programming"
/// instructor = "Иван Петров"
/// enrolled = 1234
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Catalog screen records
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Home screen records
    #[serde(default)]
    pub featured: Vec<Course>,
}

/// Catalog read from a TOML file
#[derive(Debug, Clone)]
pub struct TomlCatalog {
    origin: PathBuf,
    file: CatalogFile,
}

impl TomlCatalog {
    /// Read and parse a catalog file
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read and `Parse` if it is not a
    /// valid catalog
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content, path)?;
        info!(
            "Loaded {} catalog and {} featured courses from {}",
            catalog.file.courses.len(),
            catalog.file.featured.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse catalog text; `origin` is only used in messages
    ///
    /// # Errors
    /// Returns `Parse` if the text is not a valid catalog
    pub fn parse(content: &str, origin: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let origin = origin.into();
        let file = toml::from_str(content).map_err(|source| CatalogError::Parse {
            path: origin.clone(),
            source,
        })?;
        Ok(Self { origin, file })
    }

    /// Write a catalog file, e.g. to seed one from the sample data
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be written
    pub fn write(file: &CatalogFile, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let io_err = |source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };
        let content = toml::to_string_pretty(file)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, content).map_err(io_err)
    }
}

impl CatalogSource for TomlCatalog {
    fn courses(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.file.courses.clone())
    }

    fn featured(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.file.featured.clone())
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.origin.display())
    }
}

/// Export a source as a catalog file structure
///
/// # Errors
/// Propagates errors from the source
pub fn snapshot(source: &dyn CatalogSource) -> Result<CatalogFile, CatalogError> {
    Ok(CatalogFile {
        courses: source.courses()?,
        featured: source.featured()?,
    })
}

/// Pick the source named by configuration: an empty path means the sample data
///
/// # Errors
/// Returns an error if a configured file cannot be loaded
pub fn open_configured(file: &str) -> Result<Box<dyn CatalogSource>, CatalogError> {
    if file.trim().is_empty() {
        Ok(Box::new(SampleCatalog))
    } else {
        Ok(Box::new(TomlCatalog::open(file)?))
    }
}
