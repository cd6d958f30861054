use ria::app::{AppContext, RiaError};
use ria::config::Config;
use ria::domain::{LikedProduct, SavedProduct};
use ria::explore::{compose_feed, ContentCategory};
use ria::store::Store;

#[tokio::test]
async fn offline_explore_uses_saved_moodboards() {
    let ctx = AppContext::in_memory(Config::default()).unwrap();
    let id = ctx.store.create_moodboard("Fim de semana", Some("#98CB4F")).unwrap();
    ctx.store
        .add_product_to_moodboard(&id, &SavedProduct {
            id: "ovos-moles".into(),
            title: "Ovos Moles".into(),
            image: "https://img/ovos.jpg".into(),
        })
        .unwrap();

    let moodboards = ctx.store.get_all_moodboards().unwrap();
    let pools = ctx.gateway.explore_pools(moodboards, true).await;
    let feed = compose_feed(&pools, &ctx.config.explore.options(42));

    let boards: Vec<_> = feed
        .iter()
        .filter(|e| e.category() == ContentCategory::Moodboard)
        .collect();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].id(), id);
    assert_eq!(feed.len(), 4 + 3 + 3 + 1);
}

#[tokio::test]
async fn like_changes_reach_subscribers() {
    let ctx = AppContext::in_memory(Config::default()).unwrap();
    let mut updates = ctx.library.subscribe();

    let product = LikedProduct::new("raia-molho-pardo", "Raia de Molho Pardo", "img");
    assert!(ctx.library.toggle_like(&product).unwrap());

    let snapshot = updates.recv().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, "raia-molho-pardo");
}

#[test]
fn unknown_moodboard_is_an_error() {
    let ctx = AppContext::in_memory(Config::default()).unwrap();
    assert!(matches!(
        ctx.store.delete_moodboard("missing"),
        Err(RiaError::MoodboardNotFound(_))
    ));
}
