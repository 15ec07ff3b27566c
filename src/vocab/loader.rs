//! Vocabulary loading for each platform
//!
//! Native builds read `<dir>/n<level>.csv` from disk; browser builds fetch
//! `<base>/data/n<level>.csv`.

use super::{JlptLevel, VocabError, Word, parse_jlpt_csv};

/// Parse CSV text for a level, treating an empty result as an error
pub fn words_from_csv(level: JlptLevel, text: &str) -> Result<Vec<Word>, VocabError> {
    let words = parse_jlpt_csv(text)?;
    if words.is_empty() {
        return Err(VocabError::Empty(level));
    }
    log::info!("Loaded {} {} words", words.len(), level);
    Ok(words)
}

/// Load a level's vocabulary from a directory of CSV files
#[cfg(not(target_arch = "wasm32"))]
pub fn load_words_from_dir(
    dir: impl AsRef<std::path::Path>,
    level: JlptLevel,
) -> Result<Vec<Word>, VocabError> {
    let path = dir.as_ref().join(level.csv_file_name());
    let text = std::fs::read_to_string(&path)?;
    words_from_csv(level, &text)
}

/// URL of a level's vocabulary CSV under `base_url`
pub fn csv_url(base_url: &str, level: JlptLevel) -> String {
    format!(
        "{}/data/{}",
        base_url.trim_end_matches('/'),
        level.csv_file_name()
    )
}

/// Fetch a level's vocabulary over HTTP (browser only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_words_for_level(
    base_url: &str,
    level: JlptLevel,
) -> Result<Vec<Word>, VocabError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let url = csv_url(base_url, level);
    let fetch_err = || VocabError::Fetch {
        level,
        url: url.clone(),
    };

    let window = web_sys::window().ok_or_else(fetch_err)?;
    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|_| fetch_err())?;
    let response: web_sys::Response = response.dyn_into().map_err(|_| fetch_err())?;
    if !response.ok() {
        return Err(fetch_err());
    }

    let text = response.text().map_err(|_| fetch_err())?;
    let text = JsFuture::from(text).await.map_err(|_| fetch_err())?;
    let text = text.as_string().ok_or_else(fetch_err)?;

    words_from_csv(level, &text).inspect_err(|err| {
        log::error!("Error while parsing {} CSV: {}", level, err);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "expression,reading,meaning,tags\n多分,たぶん,probably,N5\n";

    #[test]
    fn test_words_from_csv() {
        let words = words_from_csv(JlptLevel::N5, SAMPLE_CSV).unwrap();
        assert_eq!(words[0].hiragana, "たぶん");
    }

    #[test]
    fn test_words_from_csv_empty_is_error() {
        let result = words_from_csv(JlptLevel::N2, "expression,reading,meaning\nカ,カ,x\n");
        assert!(matches!(result, Err(VocabError::Empty(JlptLevel::N2))));
    }

    #[test]
    fn test_csv_url() {
        assert_eq!(csv_url("/", JlptLevel::N5), "/data/n5.csv");
        assert_eq!(csv_url("", JlptLevel::N4), "/data/n4.csv");
        assert_eq!(csv_url("/kotoba/", JlptLevel::N3), "/kotoba/data/n3.csv");
    }

    #[test]
    fn test_load_words_from_dir() {
        let dir = std::env::temp_dir().join(format!("kotoba-vocab-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("n5.csv"), SAMPLE_CSV).unwrap();

        let words = load_words_from_dir(&dir, JlptLevel::N5).unwrap();
        assert_eq!(words.len(), 1);

        let missing = load_words_from_dir(&dir, JlptLevel::N1);
        assert!(matches!(missing, Err(VocabError::Io(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
