use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::domain::{FeedItem, FeedLoader};

pub async fn load_feed(ctx: &AppContext, url: Option<&str>) -> Result<()> {
    let loader = ctx.loader(url)?;
    let items = loader.load_feed().await?;

    if items.is_empty() {
        println!("Feed is empty");
        return Ok(());
    }

    println!("Loaded {} items", items.len());
    for item in &items {
        println!("{}", format_item(item));
    }

    Ok(())
}

pub fn show_config_path() -> Result<()> {
    let path = Config::default_config_path()?;
    println!("{}", path.display());
    Ok(())
}

fn format_item(item: &FeedItem) -> String {
    let mut line = format!("{}  {}", item.id, item.image_url);
    if let Some(location) = &item.location {
        line.push_str(&format!("  @ {}", location));
    }
    line.push_str(&format!("\n    {}", item.display_description()));
    line
}
