//! Behaviour every `ItemRepository` backend must share.
//!
//! Each function takes a fresh, empty repository and a host unique to the
//! test so backends with shared state (Redis) do not interfere.

use kv_url_shortener::domain::entities::{ItemFields, ItemPatch};
use kv_url_shortener::domain::repositories::ItemRepository;

fn fields(param: &str) -> ItemFields {
    ItemFields {
        param: param.to_string(),
        description: None,
        url: format!("https://example.com/{param}"),
        count: 0,
        unavailable: false,
    }
}

pub async fn upsert_then_find<R: ItemRepository + ?Sized>(repo: &R, host: &str) {
    let stored = repo
        .upsert(
            host,
            ItemFields {
                description: Some("Described".to_string()),
                count: 7,
                ..fields("k")
            },
        )
        .await
        .unwrap();

    assert_eq!(stored.param(), "k");
    assert_eq!(stored.count(), 7);

    let found = repo.find(host, "k").await.unwrap().unwrap();
    assert_eq!(found, stored);
    assert_eq!(found.description(), Some("Described"));
}

pub async fn find_missing_is_none<R: ItemRepository + ?Sized>(repo: &R, host: &str) {
    assert!(repo.find(host, "missing").await.unwrap().is_none());
    assert!(repo.find_all(host).await.unwrap().is_empty());
}

pub async fn upsert_overwrites<R: ItemRepository + ?Sized>(repo: &R, host: &str) {
    repo.upsert(host, fields("k")).await.unwrap();
    repo.upsert(
        host,
        ItemFields {
            url: "https://replaced.example".to_string(),
            ..fields("k")
        },
    )
    .await
    .unwrap();

    let all = repo.find_all(host).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].raw_url(), "https://replaced.example");
}

pub async fn find_all_is_ordered_and_host_scoped<R: ItemRepository + ?Sized>(
    repo: &R,
    host: &str,
    other_host: &str,
) {
    for param in ["b", "a", "c", "B"] {
        repo.upsert(host, fields(param)).await.unwrap();
    }
    repo.upsert(other_host, fields("z")).await.unwrap();

    let params: Vec<String> = repo
        .find_all(host)
        .await
        .unwrap()
        .iter()
        .map(|i| i.param().to_string())
        .collect();

    assert_eq!(params, vec!["B", "a", "b", "c"]);
    assert!(repo.find(host, "z").await.unwrap().is_none());
}

pub async fn update_merges_over_snapshot<R: ItemRepository + ?Sized>(repo: &R, host: &str) {
    let item = repo
        .upsert(
            host,
            ItemFields {
                description: Some("keep".to_string()),
                count: 2,
                ..fields("k")
            },
        )
        .await
        .unwrap();

    let updated = repo
        .update(
            host,
            &item,
            ItemPatch {
                unavailable: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.is_unavailable());
    assert!(updated.url().is_none());
    assert_eq!(updated.raw_url(), "https://example.com/k");
    assert_eq!(updated.description(), Some("keep"));
    assert_eq!(updated.count(), 2);

    assert_eq!(repo.find(host, "k").await.unwrap().unwrap(), updated);
}

pub async fn update_is_last_writer_wins<R: ItemRepository + ?Sized>(repo: &R, host: &str) {
    let snapshot = repo
        .upsert(host, ItemFields { count: 5, ..fields("k") })
        .await
        .unwrap();

    for _ in 0..2 {
        repo.update(
            host,
            &snapshot,
            ItemPatch {
                count: Some(snapshot.count() + 1),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    assert_eq!(repo.find(host, "k").await.unwrap().unwrap().count(), 6);
}

pub async fn delete_removes_and_is_idempotent<R: ItemRepository + ?Sized>(repo: &R, host: &str) {
    let item = repo.upsert(host, fields("k")).await.unwrap();
    repo.upsert(host, fields("other")).await.unwrap();

    repo.delete(host, &item).await.unwrap();
    assert!(repo.find(host, "k").await.unwrap().is_none());
    assert_eq!(repo.find_all(host).await.unwrap().len(), 1);

    // Deleting an absent key is a no-op.
    repo.delete(host, &item).await.unwrap();
}
