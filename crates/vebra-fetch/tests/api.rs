//! Feed operations against a mock feed.

mod common;

use chrono::{TimeZone, Utc};
use common::{BASIC_AUTH, BRANCHES_XML, PROPERTY_XML, api};
use std::sync::Arc;
use vebra_fetch::FeedError;
use vebra_store::MemoryTokenStore;
use vebra_types::{
    BranchSummary, ChangedFileSummary, ChangedPropertySummary, FeedDate, PropertyAction,
    SanitizedBool, Token,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_branch_copies_summary_ids() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/export/FEED/v10/branch/3741",
        "<branch><name>Shelbourne Estates Nelson</name><town>Nelson</town></branch>",
    )
    .await;

    let api = api(&server, Arc::new(MemoryTokenStore::new()));
    let summary = BranchSummary {
        name: "Shelbourne Estates Nelson".to_string(),
        firm_id: 1055,
        branch_id: 1,
        url: format!("{}/export/FEED/v10/branch/3741", server.uri()),
    };

    let branch = api.branch(&summary).await.unwrap();
    assert_eq!(branch.client_id, 3741);
    assert_eq!(branch.firm_id, 1055);
    assert_eq!(branch.branch_id, 1);
    assert_eq!(branch.town, "Nelson");
}

#[tokio::test]
async fn test_branch_without_client_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = api(&server, Arc::new(MemoryTokenStore::new()));
    let summary = BranchSummary {
        url: "http://webservices.vebra.com/export/FEED/v10/branch/".to_string(),
        ..BranchSummary::default()
    };

    assert!(matches!(
        api.branch(&summary).await.unwrap_err(),
        FeedError::ClientId(_)
    ));
}

#[tokio::test]
async fn test_branches_and_properties() {
    let server = MockServer::start().await;
    serve(&server, "/export/FEED/v10/branch", BRANCHES_XML).await;
    serve(
        &server,
        "/export/FEED/v10/branch/3741/property",
        "<properties>\
            <property><prop_id>29015446</prop_id><lastchanged>2017-03-21T13:39:33</lastchanged>\
            <url>http://webservices.vebra.com/export/FEED/v10/branch/3741/property/29015446</url></property>\
        </properties>",
    )
    .await;
    serve(
        &server,
        "/export/FEED/v10/branch/3741/property/29015446",
        PROPERTY_XML,
    )
    .await;

    let api = api(&server, Arc::new(MemoryTokenStore::new()));

    let branches = api.branches().await.unwrap();
    let client_id = branches.branches[0].client_id().unwrap();
    let listing = api.properties(client_id).await.unwrap();
    assert_eq!(listing.properties.len(), 1);

    let property = api
        .property(client_id, listing.properties[0].property_id)
        .await
        .unwrap();
    assert_eq!(property.id.get(), 29_015_446);
    assert_eq!(property.price.value.get(), 125_000);
    assert_eq!(property.bedrooms.get(), 3);
}

#[tokio::test]
async fn test_change_feeds_use_since_path() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/export/FEED/v10/property/2024/03/01/09/05/00",
        "<propertieschanged>\
            <property><propid>29015446</propid><lastchanged>2024-03-01T10:00:00</lastchanged>\
            <action>updated</action>\
            <url>http://webservices.vebra.com/export/FEED/v10/branch/3741/property/29015446</url></property>\
        </propertieschanged>",
    )
    .await;
    serve(
        &server,
        "/export/FEED/v10/files/2024/03/01/09/05/00",
        "<files><file><file_id>2</file_id><file_propid>29015446</file_propid>\
            <deleted>false</deleted><url>http://images.vebra.com/2.jpg</url>\
            <prop_url>http://webservices.vebra.com/export/FEED/v10/branch/3741/property/29015446</prop_url>\
        </file></files>",
    )
    .await;

    let api = api(&server, Arc::new(MemoryTokenStore::new()));
    let since = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();

    let changed = api.changed_properties(since).await.unwrap();
    assert_eq!(changed.properties.len(), 1);
    assert_eq!(changed.properties[0].client_id().unwrap(), 3741);

    let files = api.changed_files(since).await.unwrap();
    assert_eq!(files.files.len(), 1);
    assert!(!files.files[0].is_deleted());
}

#[tokio::test]
async fn test_changed_property_follows_link() {
    let server = MockServer::start().await;
    serve(&server, "/elsewhere/property/29015446", PROPERTY_XML).await;

    let api = api(&server, Arc::new(MemoryTokenStore::new()));
    let summary = ChangedPropertySummary {
        property_id: 29_015_446,
        last_changed: FeedDate::NONE,
        url: format!("{}/elsewhere/property/29015446", server.uri()),
        action: PropertyAction::Updated,
    };

    let property = api.changed_property(&summary).await.unwrap();
    assert_eq!(property.address.town, "Nelson");
}

#[tokio::test]
async fn test_deleted_property_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = api(&server, Arc::new(MemoryTokenStore::new()));
    let summary = ChangedPropertySummary {
        property_id: 29_015_448,
        last_changed: FeedDate::NONE,
        url: format!("{}/export/FEED/v10/branch/3742/property/29015448", server.uri()),
        action: PropertyAction::Deleted,
    };

    let err = api.changed_property(&summary).await.unwrap_err();
    assert!(matches!(err, FeedError::PropertyDeleted(29_015_448)));
    assert_eq!(err.to_string(), "Property 29015448 has been deleted");
}

#[tokio::test]
async fn test_property_from_changed_file() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/export/FEED/v10/branch/3741/property/29015446",
        PROPERTY_XML,
    )
    .await;

    let api = api(&server, Arc::new(MemoryTokenStore::new()));
    let summary = ChangedFileSummary {
        file_id: 2,
        property_id: 29_015_446,
        updated: FeedDate::NONE,
        deleted: SanitizedBool(false),
        url: "http://images.vebra.com/2.jpg".to_string(),
        prop_url: format!(
            "{}/export/FEED/v10/branch/3741/property/29015446",
            server.uri()
        ),
    };

    let property = api.property_from_changed_file(&summary).await.unwrap();
    assert_eq!(property.firm_id.get(), 1055);
}

#[tokio::test]
async fn test_seed_token_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Authorization", "Basic c2VlZGVk"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BRANCHES_XML))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server, Arc::new(MemoryTokenStore::new()));
    api.seed_token(&Token::issued("seeded")).unwrap();

    api.branches().await.unwrap();
}
