use axum::http::StatusCode;
use pressbox::db::{self, RegisterResult};
use pressbox::tools::import::{self, ImportResult};

mod common;

#[tokio::test]
async fn publish_and_read() -> Result<(), Box<dyn std::error::Error>>
{
	let app = common::init_app().await?;

	let first = match db::article::create("Hello World","A first piece of text.\n\nWith two paragraphs.",Some("jane".into())).await? {
		RegisterResult::Created(article) => article,
		RegisterResult::Existing(_) => panic!("First create should register."),
	};
	assert_eq!(first.slug,"hello-world");

	if let RegisterResult::Created(_) = db::article::create("Hello World","other text",None).await? {
		panic!("Same title should report the existing article.");
	}

	match db::article::create("Second Post","More text.",None).await? {
		RegisterResult::Created(_) => {},
		RegisterResult::Existing(_) => panic!("Distinct title should register."),
	}

	// listing is newest first
	let articles = db::article::list().await?;
	assert_eq!(articles.len(),2);
	assert_eq!(articles[0].slug,"second-post");

	let by_jane = db::article::by_author("jane").await?;
	assert_eq!(by_jane.len(),1);
	assert_eq!(by_jane[0].slug,"hello-world");

	let response = common::get(&app,"/articles/").await;
	assert_eq!(response.status(),StatusCode::OK);
	let listing = common::body_string(response).await;
	assert!(listing.contains("Hello World") && listing.contains("Second Post"));

	// listing options from the query string
	let response = common::get(&app,"/articles/?filter=Second").await;
	let filtered = common::body_string(response).await;
	assert!(filtered.contains("Second Post") && !filtered.contains("Hello World"));
	let response = common::get(&app,"/articles/?sort_by=title").await;
	assert_eq!(response.status(),StatusCode::OK);

	let response = common::get(&app,"/articles/hello-world/").await;
	assert_eq!(response.status(),StatusCode::OK);
	assert!(common::body_string(response).await.contains("With two paragraphs."));

	let response = common::get(&app,"/articles/no-such-article/").await;
	assert_eq!(response.status(),StatusCode::NOT_FOUND);

	let response = common::get(&app,"/articles/json").await;
	assert_eq!(response.status(),StatusCode::OK);
	let parsed:serde_json::Value = serde_json::from_str(&common::body_string(response).await)?;
	assert_eq!(parsed.as_array().map(Vec::len),Some(2));

	let response = common::get(&app,"/articles/hello-world/json").await;
	assert_eq!(response.status(),StatusCode::OK);
	let parsed:serde_json::Value = serde_json::from_str(&common::body_string(response).await)?;
	assert_eq!(parsed["title"],"Hello World");

	// the root redirects to the listing
	let response = common::get(&app,"/").await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);

	let response = common::get(&app,"/api/info").await;
	assert_eq!(response.status(),StatusCode::OK);
	let info:serde_json::Value = serde_json::from_str(&common::body_string(response).await)?;
	assert!(info["version"].as_str().unwrap_or("").starts_with("pressbox"));

	let updated = db::article::update("hello-world","Hello World","Edited text.").await?;
	assert!(updated.updated.is_some());
	assert!(db::article::update("gone","x","y").await.is_err());

	assert!(db::article::remove("second-post").await?.is_some());
	assert_eq!(db::article::list().await?.len(),1);

	// bulk import from files, deduplicating by slug
	let dir = std::env::temp_dir().join(format!("pressbox_import_{}",rand::random::<u32>()));
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join("third.txt"),"# Third Post\n\nImported text.")?;
	std::fs::write(dir.join("hello.txt"),"# Hello World\n\nAlready published elsewhere.")?;
	std::fs::write(dir.join("broken.txt"),"")?;
	let results = import::import_glob(&format!("{}/*.txt",dir.display()),Some("jane".into())).await?;
	assert_eq!(results.len(),3);
	assert_eq!(results.iter().filter(|r|matches!(r,ImportResult::Registered {..})).count(),1);
	assert_eq!(results.iter().filter(|r|matches!(r,ImportResult::Existed {..})).count(),1);
	assert_eq!(results.iter().filter(|r|matches!(r,ImportResult::Err {..})).count(),1);
	assert!(db::article::get("third-post").await?.is_some());

	Ok(())
}
