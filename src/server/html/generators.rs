use byte_unit::Byte;
use byte_unit::UnitType::Binary;
use html::content::Navigation;
use html::inline_text::Anchor;
use html::root::{Body, Html};
use html::tables::Table;
use std::path::PathBuf;

use crate::db::{Article, User};

pub(crate) fn wrap_body<T>(body:Body, title:T) -> Html where T:Into<std::borrow::Cow<'static, str>>
{
	Html::builder().lang("en")
		.head(|h|h
			.title(|t|t.text(title))
			.meta(|m|m.charset("utf-8"))
			.style(|s|s
				.text(r#"body {font-family: sans-serif; max-width: 46rem; margin: 0 auto; padding: 0 10px;}"#)
				.text(r#"nav {border-bottom: 1px solid black;}"#)
				.text(r#"nav ul {list-style-type: none; padding-left: 0;}"#)
				.text(r#"nav li {display: inline-block; margin-right: 12px;}"#)
				.text(r#"table {border-collapse: collapse; border: 2px solid rgb(200,200,200); letter-spacing: 1px; font-size: 0.8rem;}"#)
				.text(r#"td, th {border: 1px solid rgb(190,190,190); padding: 10px 20px;}"#)
				.text(r#"th {background-color: rgb(235,235,235);}"#)
				.text(r#"tr:nth-child(even) td {background-color: rgb(250,250,250);}"#)
				.text(r#"tr:nth-child(odd) td {background-color: rgb(245,245,245);}"#)
				.text(r#".byline {color: rgb(120,120,120); font-size: 0.8rem;}"#)
				.text(r#".error {color: rgb(180,40,40);}"#)
			)
		)
		.push(body)
		.build()
}

pub(crate) fn site_nav() -> Navigation
{
	let entries = [
		("/articles/","Articles"),
		("/accounts/login/","Log in"),
		("/accounts/register/","Register"),
		("/admin/","Admin"),
	];
	Navigation::builder()
		.unordered_list(|l|
			entries.into_iter().fold(l,|l,(href,label)|
				l.list_item(|i|i.anchor(|a|a.href(href).text(label)))
			)
		)
		.build()
}

pub(crate) fn article_link(article:&Article) -> Anchor
{
	Anchor::builder()
		.href(format!("/articles/{}/",article.slug))
		.text(article.title.clone())
		.build()
}

pub(crate) fn byline(article:&Article) -> String
{
	let date = article.created.0.format("%Y-%m-%d %H:%M");
	match &article.author {
		Some(author) => format!("{date} by {author}"),
		None => date.to_string(),
	}
}

pub(crate) fn article_table(articles:&[Article]) -> Table
{
	let mut table_builder = Table::builder();
	table_builder.table_row(|r|r
		.table_header(|c|c.text("Title"))
		.table_header(|c|c.text("Author"))
		.table_header(|c|c.text("Created"))
		.table_header(|c|c.text("Actions"))
	);
	for article in articles
	{
		let link = article_link(article);
		let slug = article.slug.clone();
		table_builder.table_row(|r|r
			.table_cell(|c|c.push(link))
			.table_cell(|c|c.text(article.author.clone().unwrap_or("----------".into())))
			.table_cell(|c|c.text(article.created.0.format("%Y-%m-%d %H:%M").to_string()))
			.table_cell(|c|c
				.anchor(|a|a.href(format!("/admin/articles/{slug}/edit/")).text("edit"))
				.text(" ")
				.form(|f|f
					.action(format!("/admin/articles/{slug}/delete/")).method("post")
					.button(|b|b.text("delete"))
				)
			)
		);
	}
	table_builder.build()
}

pub(crate) fn user_table(users:&[User]) -> Table
{
	let mut table_builder = Table::builder();
	table_builder.table_row(|r|r
		.table_header(|c|c.text("Username"))
		.table_header(|c|c.text("Display name"))
		.table_header(|c|c.text("Admin"))
		.table_header(|c|c.text("Joined"))
		.table_header(|c|c.text("Actions"))
	);
	for user in users
	{
		let username = user.username.clone();
		table_builder.table_row(|r|r
			.table_cell(|c|c.anchor(|a|a
				.href(format!("/accounts/{username}/"))
				.text(username.clone())
			))
			.table_cell(|c|c.text(user.display_name.clone()))
			.table_cell(|c|c.text(if user.admin {"yes"} else {"no"}))
			.table_cell(|c|c.text(user.joined.0.format("%Y-%m-%d").to_string()))
			.table_cell(|c|c.form(|f|f
				.action(format!("/admin/users/{username}/delete/")).method("post")
				.button(|b|b.text("delete"))
			))
		);
	}
	table_builder.build()
}

pub(crate) fn media_table(files:&[(PathBuf,u64)], media_url:&str) -> Table
{
	let mut table_builder = Table::builder();
	table_builder.table_row(|r|r
		.table_header(|c|c.text("File"))
		.table_header(|c|c.text("Size"))
	);
	for (path,size) in files
	{
		let href = format!("{media_url}/{}",path.display());
		let name = path.display().to_string();
		let size = format!("{:.2}",Byte::from(*size).get_appropriate_unit(Binary));
		table_builder.table_row(|r|r
			.table_cell(|c|c.anchor(|a|a.href(href).text(name)))
			.table_cell(|c|c.text(size))
		);
	}
	table_builder.build()
}
