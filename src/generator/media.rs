//! Image records, one per file in the image directory.

use std::fs;
use std::path::Path;

use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;

use super::Generator;
use crate::errors::GenError;
use crate::models::{IdPrefix, Image};

/// List the files in `dir` as `/`-separated paths, sorted by file name.
///
/// Subdirectories are skipped.
pub fn list_image_files(dir: &Path) -> Result<Vec<String>, GenError> {
    let entries = fs::read_dir(dir).map_err(|e| GenError::image_dir(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GenError::image_dir(dir, e))?;
        let file_type = entry.file_type().map_err(|e| GenError::image_dir(dir, e))?;
        if file_type.is_dir() {
            continue;
        }
        names.push(entry.file_name());
    }
    names.sort();

    Ok(names
        .iter()
        .map(|name| dir.join(name).to_string_lossy().replace('\\', "/"))
        .collect())
}

impl Generator<'_> {
    pub(super) fn images(&mut self, files: &[String]) -> Result<Vec<Image>, GenError> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let n_dishes = self.config.n_restos * self.config.n_dishes;
        if n_dishes == 0 {
            return Err(GenError::MissingReference(
                "images need at least one dish to link to".to_string(),
            ));
        }
        if self.config.n_users == 0 {
            return Err(GenError::MissingReference(
                "images need at least one user as uploader".to_string(),
            ));
        }

        let images = files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                let dish_id = IdPrefix::Dish.nth(self.rng.gen_range(0..n_dishes));
                let uploader_id = IdPrefix::User.nth(self.rng.gen_range(0..self.config.n_users));
                let upload_dt = self.datetime_between(self.clock.month_start, self.clock.now);
                let n_tags = self.rng.gen_range(0..self.config.max_tags);
                let tags: Vec<String> = (0..n_tags)
                    .map(|_| Word().fake_with_rng(&mut self.rng))
                    .collect();

                Image {
                    id: IdPrefix::Image.nth(index),
                    file: file.clone(),
                    dish_id,
                    uploader_id,
                    upload_dt,
                    tags,
                }
            })
            .collect();

        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::TempDir;

    use super::*;
    use crate::config::Config;

    #[test]
    fn test_listing_is_sorted_and_skips_directories() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("b.jpg")).unwrap();
        File::create(dir.path().join("a.png")).unwrap();
        fs::create_dir(dir.path().join("thumbs")).unwrap();

        let files = list_image_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("/a.png"));
        assert!(files[1].ends_with("/b.jpg"));
        assert!(files.iter().all(|f| !f.contains('\\')));
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = list_image_files(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, GenError::ImageDirectory(_)));
    }

    #[test]
    fn test_tag_count_stays_below_max() {
        let config = Config {
            max_tags: 3,
            ..Config::default()
        };
        let files: Vec<String> = (0..200).map(|i| format!("img/{}.jpg", i)).collect();
        let images = Generator::new(&config).images(&files).unwrap();

        assert_eq!(images.len(), 200);
        assert!(images.iter().all(|img| img.tags.len() < 3));
        assert!(images.iter().any(|img| img.tags.is_empty()));
    }

    #[test]
    fn test_single_tag_bound_means_no_tags() {
        let config = Config {
            max_tags: 1,
            ..Config::default()
        };
        let files = vec!["img/only.jpg".to_string()];
        let images = Generator::new(&config).images(&files).unwrap();
        assert!(images[0].tags.is_empty());
    }

    #[test]
    fn test_images_without_dishes_fail() {
        let config = Config {
            n_restos: 0,
            ..Config::default()
        };
        let files = vec!["img/only.jpg".to_string()];
        let err = Generator::new(&config).images(&files).unwrap_err();
        assert!(matches!(err, GenError::MissingReference(_)));
    }

    #[test]
    fn test_no_files_no_images() {
        let config = Config {
            n_users: 0,
            ..Config::default()
        };
        assert!(Generator::new(&config).images(&[]).unwrap().is_empty());
    }
}
