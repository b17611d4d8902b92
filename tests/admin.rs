use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use pressbox::tools::account;

mod common;

#[tokio::test]
async fn admin_surface() -> Result<(), Box<dyn std::error::Error>>
{
	let app = common::init_app().await?;

	// anonymous requests are sent to the login form
	let response = common::get(&app,"/admin/").await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION],"/accounts/login/");

	account::register("reader","","secret-pages",false).await?;
	account::register("editor","The Editor","secret-pages",true).await?;

	// and so are logged-in non-admins
	let response = common::post_form(&app,"/accounts/auth/","username=reader&password=secret-pages",None).await;
	let reader_cookie = common::session_cookie(&response);
	let response = common::get_authed(&app,"/admin/",&reader_cookie).await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);

	let response = common::post_form(&app,"/accounts/auth/","username=editor&password=secret-pages",None).await;
	let cookie = common::session_cookie(&response);
	let response = common::get_authed(&app,"/admin/",&cookie).await;
	assert_eq!(response.status(),StatusCode::OK);

	// publish through the form, then find it on the public listing
	let response = common::post_form(&app,"/admin/articles/","title=Launch+Day&body=We+are+live.",Some(&cookie)).await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);
	let response = common::get(&app,"/articles/launch-day/").await;
	let page = common::body_string(response).await;
	assert!(page.contains("We are live.") && page.contains("by editor"));

	// media uploads land below the media url
	let response = common::request(&app, Request::post("/admin/media/note.txt")
		.header(header::COOKIE,&cookie)
		.body(Body::from("media payload"))?).await;
	assert_eq!(response.status(),StatusCode::CREATED);
	let upload:serde_json::Value = serde_json::from_str(&common::body_string(response).await)?;
	let url = upload["Url"].as_str().expect("upload reports its url").to_string();

	let response = common::get(&app,&url).await;
	assert_eq!(response.status(),StatusCode::OK);
	assert_eq!(common::body_string(response).await,"media payload");

	// identical re-upload is reported, different bytes under the same name are refused
	let response = common::request(&app, Request::post("/admin/media/note.txt")
		.header(header::COOKIE,&cookie)
		.body(Body::from("media payload"))?).await;
	assert_eq!(response.status(),StatusCode::FOUND);
	let response = common::request(&app, Request::post("/admin/media/note.txt")
		.header(header::COOKIE,&cookie)
		.body(Body::from("different payload"))?).await;
	assert_eq!(response.status(),StatusCode::CONFLICT);

	let response = common::get_authed(&app,"/admin/media/",&cookie).await;
	assert!(common::body_string(response).await.contains("note.txt"));

	// editing and deleting through the admin routes
	let response = common::post_form(&app,"/admin/articles/launch-day/","title=Launch+Day&body=We+are+still+live.",Some(&cookie)).await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);
	let response = common::get(&app,"/articles/launch-day/").await;
	assert!(common::body_string(response).await.contains("still live"));

	let response = common::post_form(&app,"/admin/articles/launch-day/delete/","",Some(&cookie)).await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);
	let response = common::get(&app,"/articles/launch-day/").await;
	assert_eq!(response.status(),StatusCode::NOT_FOUND);

	// the backup endpoint streams a database export
	let response = common::get_authed(&app,"/admin/backup",&cookie).await;
	assert_eq!(response.status(),StatusCode::OK);
	assert!(!common::body_string(response).await.is_empty());

	// user management
	let response = common::get_authed(&app,"/admin/users/",&cookie).await;
	let page = common::body_string(response).await;
	assert!(page.contains("reader") && page.contains("The Editor"));
	let response = common::post_form(&app,"/admin/users/reader/delete/","",Some(&cookie)).await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);
	let response = common::get_authed(&app,"/admin/users/",&cookie).await;
	assert!(!common::body_string(response).await.contains("reader"));

	Ok(())
}
