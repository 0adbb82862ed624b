//! Terminal rendering of shell output.

use super::{Notice, NoticeLevel, ProductDetailsState, ProductListState, ShellOutput};
use crate::catalog::Product;
use crate::cli_style::{self, TableBuilder};

const TITLE_WIDTH: usize = 44;
const DESCRIPTION_WIDTH: usize = 56;

pub fn render(output: &ShellOutput) {
    match output {
        ShellOutput::LoginScreen => render_login(),
        ShellOutput::ProductList(list) => render_product_list(list),
        ShellOutput::ProductDetails(details) => render_product_details(details),
        ShellOutput::Favorites(favorites) => render_favorites(favorites),
        ShellOutput::Help(commands) => cli_style::print_help(commands),
        ShellOutput::Notice(notice) => render_notice(notice),
    }
}

pub fn render_all(outputs: &[ShellOutput]) {
    for output in outputs {
        render(output);
    }
}

fn render_login() {
    cli_style::print_section_header("Sign in to your account");
    cli_style::print_key_value("Usage", "login <email> <password>");
    cli_style::print_section_footer();
}

fn render_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => cli_style::print_success(&notice.message),
        NoticeLevel::Info => cli_style::print_info(&notice.message),
        NoticeLevel::Error => cli_style::print_error(&notice.message),
    }
}

fn product_table(products: &[Product]) -> TableBuilder {
    let mut table = TableBuilder::new(vec!["ID", "Product", "Price", "Rating"]);
    for product in products {
        table.add_row(vec![
            product.id.to_string(),
            cli_style::truncate_to_width(&product.title, TITLE_WIDTH),
            product.display_price(),
            format!("{:.1}", product.display_rating()),
        ]);
    }
    table
}

fn render_product_list(list: &ProductListState) {
    cli_style::print_section_header("Products");
    if list.loading {
        cli_style::print_empty_list("Loading products...");
    } else if list.products.is_empty() {
        cli_style::print_empty_list("No products to show");
    } else {
        product_table(&list.products).print();
        cli_style::print_empty_list("Type 'show <product-id>' to open a product");
    }
    cli_style::print_section_footer();
}

fn render_product_details(details: &ProductDetailsState) {
    let product = &details.product;
    cli_style::print_section_header(&product.title);
    cli_style::print_key_value_highlight("Price", &product.display_price());
    cli_style::print_key_value("Category", &product.category);

    let rating = product.display_rating();
    let rating_text = match &product.rating {
        Some(r) if r.rate > 0.0 => format!(
            "{} {:.1} ({} reviews)",
            cli_style::rating_stars(rating),
            rating,
            r.count
        ),
        _ => format!("{} {:.1}", cli_style::rating_stars(rating), rating),
    };
    cli_style::print_key_value("Rating", &rating_text);
    cli_style::print_key_value("Image", &product.image);
    cli_style::print_key_value(
        "Favorite",
        &format!(
            "{} {}",
            cli_style::style_favorite_marker(details.is_favorite),
            if details.is_favorite {
                "In your favorites"
            } else {
                "Not in your favorites"
            }
        ),
    );
    cli_style::print_key_value("Description", "");
    cli_style::print_paragraph(&product.description, DESCRIPTION_WIDTH);
    println!();
    cli_style::print_empty_list("Type 'favorite' to toggle, 'back' to return to the list");
    cli_style::print_section_footer();
}

fn render_favorites(favorites: &[Product]) {
    cli_style::print_section_header("Favorites");
    if favorites.is_empty() {
        cli_style::print_empty_list("No favorites yet");
    } else {
        product_table(favorites).print();
    }
    cli_style::print_section_footer();
}
