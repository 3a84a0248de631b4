use crate::datastore::{self, Expiration};
use crate::fs::FsFactory;
use crate::types::Result;

/// Removes every due object and its ledger row, returning the number of
/// ledger rows deleted.
///
/// Records are processed grouped by namespace so one handle serves a whole
/// group. A record whose object is already absent still has its ledger row
/// deleted. If an existence probe or a removal fails, that record is skipped
/// with a warning and its row is kept, so the next sweep cycle retries it;
/// the rest of the batch still runs.
///
/// Not safe against concurrent sweeps without external mutual exclusion: two
/// sweeps can both pass the existence check before either removes. The
/// resulting remove of an absent object is tolerated.
pub async fn sweep_expired(factory: &FsFactory) -> Result<u64> {
    let mut due = datastore::due_expirations(factory.db()).await?;
    due.sort_by(|a, b| a.namespace.cmp(&b.namespace));

    let mut swept = 0_u64;
    for (namespace, records) in group_by_namespace(due) {
        let fs = factory.get_filesystem(&namespace).await?;

        for record in records {
            match fs.exists(&record.filename).await {
                Ok(true) => {
                    if let Err(e) = fs.remove(&record.filename).await {
                        log::warn!(
                            "failed to remove {}/{}, keeping ledger row for next sweep: {:?}",
                            fs.namespace(),
                            &record.filename,
                            e,
                        );
                        continue;
                    }
                }
                Ok(false) => (),
                Err(e) => {
                    log::warn!(
                        "failed to check {}/{}, keeping ledger row for next sweep: {:?}",
                        fs.namespace(),
                        &record.filename,
                        e,
                    );
                    continue;
                }
            }

            datastore::delete_expiration(factory.db(), &record.namespace, &record.filename)
                .await?;
            swept += 1;
        }
    }

    Ok(swept)
}

fn group_by_namespace(records: Vec<Expiration>) -> Vec<(String, Vec<Expiration>)> {
    let mut groups: Vec<(String, Vec<Expiration>)> = Vec::new();

    for record in records {
        match groups.last_mut() {
            Some((namespace, group)) if *namespace == record.namespace => group.push(record),
            _ => groups.push((record.namespace.clone(), vec![record])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::prelude::*;

    fn record(namespace: &str, filename: &str) -> Expiration {
        Expiration {
            namespace: namespace.to_owned(),
            filename: filename.to_owned(),
            expires: true,
            expiration: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn groups_adjacent_namespaces() {
        let records = vec![
            record("a", "one"),
            record("a", "two"),
            record("b", "three"),
        ];

        let groups = group_by_namespace(records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "a");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "b");
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn groups_nothing_when_empty() {
        assert!(group_by_namespace(Vec::new()).is_empty());
    }
}
