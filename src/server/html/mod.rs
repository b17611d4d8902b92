mod generators;

use byte_unit::Byte;
use byte_unit::UnitType::Binary;
use html::root::{Body, Html};
use html::text_content::UnorderedList;
use std::path::PathBuf;

use crate::db::{Article, Stats, User};
use generators::{article_link, article_table, byline, media_table, site_nav, user_table, wrap_body};

fn article_list(articles:&[Article]) -> UnorderedList
{
	let mut list_builder = UnorderedList::builder();
	for article in articles
	{
		let link = article_link(article);
		let line = byline(article);
		list_builder.list_item(|i|i
			.push(link)
			.side_comment(|s|s.class("byline").text(format!(" ({line})")))
		);
	}
	list_builder.build()
}

pub(crate) fn article_list_page(articles:&[Article]) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Articles"));
	if articles.is_empty() {
		body.paragraph(|p|p.text("Nothing published yet."));
	} else {
		body.push(article_list(articles));
	}
	wrap_body(body.build(),"Articles")
}

pub(crate) fn article_page(article:&Article) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text(article.title.clone()));
	body.paragraph(|p|p.class("byline").text(byline(article)));
	for chunk in article.body.split("\n\n").filter(|c|!c.trim().is_empty())
	{
		body.paragraph(|p|p.text(chunk.trim().to_string()));
	}
	wrap_body(body.build(),article.title.clone())
}

pub(crate) fn profile_page(user:&User, articles:&[Article]) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text(user.display_name.clone()));
	body.paragraph(|p|p.class("byline").text(
		format!("@{}, member since {}",user.username,user.joined.0.format("%Y-%m-%d"))
	));
	if articles.is_empty() {
		body.paragraph(|p|p.text("No articles yet."));
	} else {
		body.push(article_list(articles));
	}
	wrap_body(body.build(),user.display_name.clone())
}

pub(crate) fn login_page() -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Log in"));
	body.form(|f|f
		.action("/accounts/auth/").method("post")
		.paragraph(|p|p.input(|i|i.name("username").placeholder("username")))
		.paragraph(|p|p.input(|i|i.type_("password").name("password").placeholder("password")))
		.paragraph(|p|p.button(|b|b.text("Log in")))
	);
	body.paragraph(|p|p
		.text("No account yet? ")
		.anchor(|a|a.href("/accounts/register/").text("Register"))
	);
	wrap_body(body.build(),"Log in")
}

pub(crate) fn invalid_login_page() -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Invalid login"));
	body.paragraph(|p|p.class("error").text("The username or password was not recognized."));
	body.paragraph(|p|p.anchor(|a|a.href("/accounts/login/").text("Try again")));
	wrap_body(body.build(),"Invalid login")
}

pub(crate) fn logged_in_page(user:&User) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text(format!("Welcome, {}",user.display_name)));
	body.paragraph(|p|p
		.anchor(|a|a.href(format!("/accounts/{}/",user.username)).text("Your profile"))
	);
	if user.admin {
		body.paragraph(|p|p.anchor(|a|a.href("/admin/").text("Administration")));
	}
	body.paragraph(|p|p.anchor(|a|a.href("/accounts/logout/").text("Log out")));
	wrap_body(body.build(),"Logged in")
}

pub(crate) fn logged_out_page() -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Logged out"));
	body.paragraph(|p|p.anchor(|a|a.href("/accounts/login/").text("Log in again")));
	wrap_body(body.build(),"Logged out")
}

pub(crate) fn register_page(error:Option<&str>) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Register"));
	if let Some(message) = error {
		let message = message.to_string();
		body.paragraph(|p|p.class("error").text(message));
	}
	body.form(|f|f
		.action("/accounts/register/").method("post")
		.paragraph(|p|p.input(|i|i.name("username").placeholder("username")))
		.paragraph(|p|p.input(|i|i.name("display_name").placeholder("display name")))
		.paragraph(|p|p.input(|i|i.type_("password").name("password").placeholder("password")))
		.paragraph(|p|p.button(|b|b.text("Register")))
	);
	wrap_body(body.build(),"Register")
}

pub(crate) fn register_success_page() -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Registration complete"));
	body.paragraph(|p|p
		.text("Your account was created. ")
		.anchor(|a|a.href("/accounts/login/").text("Log in"))
	);
	wrap_body(body.build(),"Registration complete")
}

pub(crate) fn dashboard_page(stats:&Stats, media_files:usize, media_usage:Byte, recent:&[Article]) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Administration"));
	body.paragraph(|p|p.text(format!(
		"{} articles, {} users, {} active sessions, {} media files ({:.2})",
		stats.articles, stats.users, stats.sessions,
		media_files, media_usage.get_appropriate_unit(Binary)
	)));
	body.paragraph(|p|p
		.anchor(|a|a.href("/admin/articles/").text("Articles"))
		.text(" ")
		.anchor(|a|a.href("/admin/users/").text("Users"))
		.text(" ")
		.anchor(|a|a.href("/admin/media/").text("Media"))
		.text(" ")
		.anchor(|a|a.href("/admin/backup").text("Backup"))
	);
	body.heading_2(|h|h.text("Recent articles"));
	body.push(article_table(recent));
	wrap_body(body.build(),"Administration")
}

pub(crate) fn admin_articles_page(articles:&[Article]) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Articles"));
	body.push(article_table(articles));
	body.heading_2(|h|h.text("New article"));
	body.form(|f|f
		.action("/admin/articles/").method("post")
		.paragraph(|p|p.input(|i|i.name("title").placeholder("title")))
		.paragraph(|p|p.text_area(|t|t.name("body").rows(12).cols(60)))
		.paragraph(|p|p.button(|b|b.text("Publish")))
	);
	wrap_body(body.build(),"Articles")
}

pub(crate) fn edit_article_page(article:&Article) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text(format!("Edit {}",article.title)));
	body.form(|f|f
		.action(format!("/admin/articles/{}/",article.slug)).method("post")
		.paragraph(|p|p.input(|i|i.name("title").value(article.title.clone())))
		.paragraph(|p|p.text_area(|t|t.name("body").rows(12).cols(60).text(article.body.clone())))
		.paragraph(|p|p.button(|b|b.text("Save")))
	);
	wrap_body(body.build(),"Edit article")
}

pub(crate) fn admin_users_page(users:&[User]) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Users"));
	body.push(user_table(users));
	wrap_body(body.build(),"Users")
}

pub(crate) fn admin_media_page(files:&[(PathBuf,u64)], media_url:&str) -> Html
{
	let mut body = Body::builder();
	body.push(site_nav());
	body.heading_1(|h|h.text("Media"));
	if files.is_empty() {
		body.paragraph(|p|p.text("No media files stored."));
	} else {
		body.push(media_table(files, media_url));
	}
	wrap_body(body.build(),"Media")
}
