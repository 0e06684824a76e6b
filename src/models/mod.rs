mod api;
mod product;

pub use api::{
    CreateProductRequest, DeleteProductResponse, HealthResponse, ListProductsQuery,
    ProductListResponse, SearchProductsQuery, SearchResponse, StatsResponse,
    UpdateProductRequest,
};
pub use product::{NewProduct, Product, ProductPatch};
