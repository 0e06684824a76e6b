mod health;
pub mod products;

pub use health::{health_check, root, route_not_found};
pub use products::{
    create_product, delete_product, get_product, list_products, product_stats, search_products,
    update_product,
};
