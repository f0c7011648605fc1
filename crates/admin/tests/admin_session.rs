//! End-to-end panel flows over the in-memory stores.

use chrono::Utc;

use shopkeeper_admin::{Notification, ProductForm, RecordingNotifier, UserDirectory};
use shopkeeper_catalog::{Category, PropertyDefinition};
use shopkeeper_core::CategoryId;
use shopkeeper_infra::{
    InMemoryCategoryStore, InMemoryImageStore, InMemoryProductStore, InMemoryUserStore,
    ProductStore, UploadFile,
};
use shopkeeper_products::ProductDraft;
use shopkeeper_users::User;

/// Catalog store seeded with a goods → clothing → shirts chain.
fn seeded_catalog() -> (InMemoryCategoryStore, CategoryId) {
    let goods = Category::new("goods").with_properties(vec![PropertyDefinition::new(
        "origin",
        vec!["eu".to_string(), "us".to_string()],
    )]);
    let clothing = Category::child_of("clothing", goods.id).with_properties(vec![
        PropertyDefinition::new("fabric", vec!["cotton".to_string(), "wool".to_string()]),
    ]);
    let shirts = Category::child_of("shirts", clothing.id).with_properties(vec![
        PropertyDefinition::new("collar", vec!["classic".to_string(), "button".to_string()]),
    ]);
    let shirts_id = shirts.id;

    let store = InMemoryCategoryStore::new();
    store.set_all(vec![goods, clothing, shirts]);
    (store, shirts_id)
}

fn jpeg(filename: &str) -> UploadFile {
    UploadFile::new(filename, "image/jpeg", vec![0xff, 0xd8, 0xff])
}

#[tokio::test]
async fn operator_creates_a_product_end_to_end() {
    shopkeeper_observability::init();
    let (categories, shirts_id) = seeded_catalog();
    let images = InMemoryImageStore::new("mem://shop");
    let products = InMemoryProductStore::new();

    let mut form = ProductForm::new();
    form.load_categories(&categories).await.unwrap();
    form.set_title("Oxford Shirt");
    form.set_description("Everyday oxford.");
    form.set_price(4500);
    form.set_category(Some(shirts_id));

    // The editor offers the full inherited chain, nearest first.
    let offered = form.properties_to_fill().unwrap();
    let names: Vec<&str> = offered.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["collar", "fabric", "origin"]);

    form.set_property("collar", "button");
    form.set_property("fabric", "cotton");

    form.upload(&images, vec![jpeg("front.jpg"), jpeg("back.jpg")])
        .await
        .unwrap();
    assert!(!form.is_uploading());

    let saved = form.save(&products).await.unwrap();

    let stored = products.get(saved.id).unwrap();
    assert_eq!(stored.title, "Oxford Shirt");
    assert_eq!(stored.price, 4500);
    assert_eq!(stored.category, Some(shirts_id));
    assert_eq!(stored.properties.get("collar"), Some("button"));
    assert_eq!(stored.properties.get("fabric"), Some("cotton"));
    let stored_files: Vec<&str> = stored.images.iter().map(|i| i.filename.as_str()).collect();
    assert_eq!(stored_files, vec!["front.jpg", "back.jpg"]);
    assert!(stored.images.iter().all(|i| i.url.starts_with("mem://shop/")));
}

#[tokio::test]
async fn operator_edits_images_and_updates_in_place() {
    shopkeeper_observability::init();
    let images = InMemoryImageStore::default();
    let products = InMemoryProductStore::new();
    let created = products
        .create(ProductDraft {
            title: "Poster".to_string(),
            ..ProductDraft::default()
        })
        .await
        .unwrap();

    let mut form = ProductForm::for_product(&created);
    form.upload(&images, vec![jpeg("v1.jpg"), jpeg("v2.jpg")])
        .await
        .unwrap();

    // Drag the newest shot to the front.
    let ids: Vec<_> = form.draft().images.iter().map(|i| i.id).collect();
    form.reorder_images(&[ids[1], ids[0]]);

    let saved = form.save(&products).await.unwrap();

    assert_eq!(saved.id, created.id);
    assert_eq!(saved.created_at, created.created_at);
    let stored_files: Vec<&str> = saved.images.iter().map(|i| i.filename.as_str()).collect();
    assert_eq!(stored_files, vec!["v2.jpg", "v1.jpg"]);
}

#[tokio::test]
async fn operator_toggles_admin_with_notifications() {
    shopkeeper_observability::init();
    let store = InMemoryUserStore::new();
    store.insert(User::new("ana", "ana@example.com", Utc::now()));
    store.insert(User::new("bo", "bo@example.com", Utc::now()));
    let notifier = RecordingNotifier::new();

    let mut directory = UserDirectory::new();
    directory.load(&store).await.unwrap();
    let bo = directory.users()[1].id;

    directory.set_admin(&store, &notifier, bo, true).await;
    assert!(directory.users()[1].admin);

    directory.set_admin(&store, &notifier, bo, false).await;
    assert!(!directory.users()[1].admin);

    assert_eq!(
        notifier.all(),
        vec![
            Notification::Success("Users updated".to_string()),
            Notification::Success("Users updated".to_string()),
        ]
    );
}
