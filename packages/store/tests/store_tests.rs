use serde_json::{json, Map, Value};
use siteframe_common::{DirStorage, IdGenerator, MemoryStorage, Storage, StorageError};
use siteframe_schema::{
    Collection, InquiryStatus, PageDocument, Project, SectionBody, SiteSnapshot, TeamMember, Theme,
};
use siteframe_store::{
    ContentStore, InquiryError, InquiryForm, MediaError, MediaUpload, StoreError, StoreKey,
    StoreObserver, StoreOptions,
};
use std::sync::{Arc, Mutex};

fn open(storage: &MemoryStorage) -> ContentStore {
    ContentStore::open(Arc::new(storage.clone()), StoreOptions::default()).unwrap()
}

fn patch(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_reload_sees_every_mutation() {
    let storage = MemoryStorage::new();
    let mut store = open(&storage).with_id_generator(IdGenerator::sequential(100));

    let id = store
        .insert(TeamMember {
            name: "Ann".to_string(),
            role: "Surveyor".to_string(),
            ..Default::default()
        })
        .unwrap();
    store.update::<TeamMember>(&id, &patch(json!({ "role": "Lead Surveyor" }))).unwrap();
    store.remove::<TeamMember>("2").unwrap();
    store.add_page(PageDocument::new_custom("careers")).unwrap();
    store.toggle_theme().unwrap();

    let reloaded = open(&storage);
    assert_eq!(reloaded.snapshot(), store.snapshot());
    assert_eq!(reloaded.snapshot().team[0].role, "Lead Surveyor");
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn test_directory_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    {
        let storage = Arc::new(DirStorage::open(dir.path()).unwrap());
        let mut store = ContentStore::open(storage, StoreOptions::default()).unwrap();
        store.add_knowledge("Financing", "Up to 70% with partner banks.").unwrap();
    }

    let storage = Arc::new(DirStorage::open(dir.path()).unwrap());
    let store = ContentStore::open(storage, StoreOptions::default()).unwrap();
    let kb = &store.snapshot().knowledge_base;
    assert_eq!(kb.last().unwrap().topic, "Financing");
    assert!(dir.path().join("myploti_kb.json").exists());
}

#[test]
fn test_unparseable_key_falls_back_to_seed() {
    let storage = MemoryStorage::new();
    storage.set("myploti_projects", "{not json").unwrap();
    storage.set("myploti_team", "null").unwrap();

    let store = open(&storage);
    let seed = SiteSnapshot::seeded();
    assert_eq!(store.snapshot().projects, seed.projects);
    assert_eq!(store.snapshot().team, seed.team);
}

#[test]
fn test_legacy_price_string_keeps_user_listings() {
    let storage = MemoryStorage::new();
    storage
        .set(
            "myploti_projects",
            &json!([{ "id": "p1", "title": "Mine", "price": "1500000" }]).to_string(),
        )
        .unwrap();

    let mut store = open(&storage);
    let ids: Vec<&str> = store.snapshot().projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1"]);
    assert_eq!(store.get::<Project>("p1").unwrap().price, 1_500_000);

    store.update::<Project>("p1", &patch(json!({ "location": "Kitengela" }))).unwrap();
    let reloaded = open(&storage);
    assert_eq!(reloaded.snapshot().projects.len(), 1);
    assert_eq!(reloaded.get::<Project>("p1").unwrap().location, "Kitengela");
}

#[test]
fn test_unreadable_record_skips_only_itself() {
    let storage = MemoryStorage::new();
    storage.set("myploti_schema_version", "2").unwrap();
    storage
        .set(
            "myploti_team",
            &json!([
                { "id": "t1", "name": "Ann", "role": "Surveyor" },
                { "id": "t2", "name": { "first": "Bob" } },
                { "id": "t3", "name": "Cy", "role": "Architect" }
            ])
            .to_string(),
        )
        .unwrap();

    let store = open(&storage);
    let names: Vec<&str> = store.snapshot().team.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Cy"]);
}

#[test]
fn test_open_migrates_legacy_pages() {
    let storage = MemoryStorage::new();
    let legacy = json!([{
        "id": "old",
        "title": "Old",
        "sections": [
            { "id": "s1", "type": "RichText", "content": { "heading": "Hi" }, "style": { "paddingTop": "64" } },
            { "id": "s2", "type": "Stats", "content": {} }
        ]
    }]);
    storage.set("myploti_pages", &legacy.to_string()).unwrap();

    let store = open(&storage);
    let page = store.snapshot().page("old").unwrap();
    assert_eq!(page.sections[0].style.as_ref().unwrap().padding_top, Some(64));
    assert!(matches!(page.sections[1].body, SectionBody::Unknown { .. }));
    assert_eq!(storage.get("myploti_schema_version").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_media_cap_boundary() {
    let mut store = ContentStore::in_memory().unwrap();
    let limit = store.options().max_upload_bytes;

    let err = store
        .upload_media(MediaUpload::from_bytes("big.jpg", vec![0u8; limit + 1]))
        .unwrap_err();
    assert!(matches!(err, StoreError::Media(MediaError::TooLarge { .. })));
    assert!(store.snapshot().media.is_empty());

    store
        .upload_media(MediaUpload::from_bytes("ok.jpg", vec![0u8; limit]))
        .unwrap();
    assert_eq!(store.snapshot().media.len(), 1);
    assert!(store.snapshot().media[0].url.starts_with("data:image/jpeg;base64,"));
}

#[test]
fn test_inquiry_lifecycle() {
    let mut store = ContentStore::in_memory().unwrap();
    let form = InquiryForm {
        name: "Otieno".to_string(),
        email: "otieno@example.com".to_string(),
        phone: "0712 345 678".to_string(),
        location: "Juja".to_string(),
        purpose: "Site Visit".to_string(),
        message: "Saturday visit please".to_string(),
    };

    let id = store.submit_inquiry(form).unwrap();
    assert_eq!(store.snapshot().inquiries.len(), 1);
    let before = store.snapshot().inquiries[0].clone();
    assert_eq!(before.status, InquiryStatus::New);
    assert_eq!(before.phone, "0712345678");
    assert_eq!(store.snapshot().activity[0].details, "From: Otieno");

    store.set_inquiry_status(&id, InquiryStatus::Read).unwrap();
    let after = &store.snapshot().inquiries[0];
    assert_eq!(after.status, InquiryStatus::Read);
    assert_eq!(
        siteframe_schema::Inquiry {
            status: InquiryStatus::New,
            ..after.clone()
        },
        before
    );
}

#[test]
fn test_invalid_inquiry_is_not_stored() {
    let mut store = ContentStore::in_memory().unwrap();
    let err = store.submit_inquiry(InquiryForm::default()).unwrap_err();

    match err {
        StoreError::Inquiry(InquiryError::Invalid(errors)) => assert_eq!(errors.len(), 5),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(store.snapshot().inquiries.is_empty());
}

#[test]
fn test_csv_import_appends() {
    let mut store = ContentStore::in_memory().unwrap();
    let before = store.snapshot().projects.len();

    let count = store
        .import_projects_csv("title,location,price,description\nPine Hill,Ngong,1500000,Views\n")
        .unwrap();

    assert_eq!(count, 1);
    let projects: &[Project] = &store.snapshot().projects;
    assert_eq!(projects.len(), before + 1);
    assert_eq!(projects.last().unwrap().price_str, "KES 1,500,000");
    assert_eq!(store.snapshot().activity[0].action, "Import");
}

#[test]
fn test_reset_restores_seed() {
    let storage = MemoryStorage::new();
    let mut store = open(&storage);
    store.add_page(PageDocument::new_custom("promo")).unwrap();
    store.reset().unwrap();

    assert_eq!(store.snapshot(), &SiteSnapshot::seeded());
    assert_eq!(open(&storage).snapshot(), &SiteSnapshot::seeded());
}

struct Recorder(Arc<Mutex<Vec<StoreKey>>>);

impl StoreObserver for Recorder {
    fn on_change(&self, _snapshot: &SiteSnapshot, key: StoreKey) -> Result<(), StorageError> {
        self.0.lock().map_err(|_| StorageError::Poisoned)?.push(key);
        Ok(())
    }
}

#[test]
fn test_observers_see_changed_keys() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut store = ContentStore::in_memory().unwrap();
    store.subscribe(Box::new(Recorder(seen.clone())));

    store.delete_page("nonexistent").unwrap();

    let keys = seen.lock().unwrap().clone();
    assert_eq!(
        keys,
        vec![
            StoreKey::Collection(Collection::Pages),
            StoreKey::Collection(Collection::Activity)
        ]
    );
}
