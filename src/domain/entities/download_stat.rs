use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// One entry of the append-only download log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadStat {
    pub id: String,
    pub photo_id: String,
    pub user_id: String,
    pub timestamp: String,
}

impl DownloadStat {
    pub fn new(photo_id: &str, user_id: &str) -> Self {
        DownloadStat {
            id: random_id(),
            photo_id: photo_id.to_string(),
            user_id: user_id.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn random_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stat_has_base36_id_and_iso_timestamp() {
        let stat = DownloadStat::new("p-1", "u-2");

        assert_eq!(stat.id.len(), ID_LEN);
        assert!(stat.id.bytes().all(|b| ID_ALPHABET.contains(&b)));
        assert!(chrono::DateTime::parse_from_rfc3339(&stat.timestamp).is_ok());
        assert_eq!(stat.photo_id, "p-1");
        assert_eq!(stat.user_id, "u-2");
    }
}
