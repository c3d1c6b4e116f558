//! Product route handlers and the product detail presenter.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use verdant_core::ProductId;

use crate::commerce::types::Product;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::User;
use crate::state::AppState;

/// Glyph rendered in place of a missing product image.
pub const IMAGE_PLACEHOLDER: &str = "🌿";

// =============================================================================
// Presenter
// =============================================================================

/// The primary call-to-action of the product detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Purchase is available: customer role and in stock.
    AddToCart,
    /// Degraded affordance: closes the view, still labeled with the price.
    ViewOnly,
}

/// Render model for the product detail modal.
///
/// Built from an already-normalized [`Product`]; the presenter never looks
/// at wire field names. `build` is a pure no-render guard: it yields `None`
/// when the view is hidden or no product is supplied, and that is not an
/// error.
#[derive(Debug, Clone)]
pub struct ProductDetailView {
    pub product: Product,
    pub price: String,
    pub primary_action: PrimaryAction,
}

impl ProductDetailView {
    /// Build the view, or `None` when there is nothing to render.
    #[must_use]
    pub fn build(visible: bool, product: Option<Product>, user: Option<&User>) -> Option<Self> {
        if !visible {
            return None;
        }
        let product = product?;

        let primary_action = if user.is_some_and(|u| u.role.is_customer()) && product.in_stock {
            PrimaryAction::AddToCart
        } else {
            PrimaryAction::ViewOnly
        };

        Some(Self {
            price: product.price.to_string(),
            primary_action,
            product,
        })
    }

    /// Whether the primary action adds to the cart.
    #[must_use]
    pub const fn can_add_to_cart(&self) -> bool {
        matches!(self.primary_action, PrimaryAction::AddToCart)
    }
}

// =============================================================================
// Card Views
// =============================================================================

/// Product display data for listing cards.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub image: Option<String>,
    pub category: String,
    pub display_rating: f64,
    pub in_stock: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            category: product.category.clone(),
            display_rating: product.display_rating,
            in_stock: product.in_stock,
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub logged_in: bool,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub view: ProductDetailView,
}

/// Product detail modal fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_modal.html")]
pub struct ProductModalTemplate {
    pub view: ProductDetailView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the product listing page.
pub async fn index(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
) -> Result<impl IntoResponse> {
    let products = state.commerce().list_products().await?;

    Ok(ProductsIndexTemplate {
        products: products.iter().map(ProductCardView::from).collect(),
        logged_in: user.is_some(),
    })
}

/// Display the product detail page.
pub async fn show(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<i64>,
) -> Result<axum::response::Response> {
    let product = state.commerce().get_product(id).await?;

    match ProductDetailView::build(true, Some(product), user.as_ref()) {
        Some(view) => Ok(ProductShowTemplate { view }.into_response()),
        None => Ok(axum::response::Redirect::to("/products").into_response()),
    }
}

/// Display the product detail modal fragment (for HTMX).
pub async fn modal(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<i64>,
) -> Result<axum::response::Response> {
    let product = state.commerce().get_product(id).await?;

    match ProductDetailView::build(true, Some(product), user.as_ref()) {
        Some(view) => Ok(ProductModalTemplate { view }.into_response()),
        None => Ok(axum::http::StatusCode::NO_CONTENT.into_response()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use verdant_core::{Price, UserId, UserRole};

    use crate::commerce::types::EcoAttributes;

    fn product(in_stock: bool) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Bamboo Toothbrush".to_owned(),
            image: Some("https://cdn.example/p/1.jpg".to_owned()),
            brand: "GreenSmile".to_owned(),
            price: Price::new(Decimal::new(499, 2)),
            display_rating: 4.3,
            eco_rating: 5.0,
            category: "Personal Care".to_owned(),
            description: Some("Compostable handle.".to_owned()),
            tags: vec!["compostable".to_owned()],
            eco: EcoAttributes {
                organic: true,
                ..EcoAttributes::default()
            },
            in_stock,
        }
    }

    fn user(role: UserRole) -> User {
        User {
            id: UserId::new(1),
            email: Some("a@b.com".to_owned()),
            username: None,
            role,
            first_name: None,
            last_name: None,
            business_name: None,
        }
    }

    #[test]
    fn test_build_guards_on_visibility_and_product() {
        assert!(ProductDetailView::build(false, Some(product(true)), None).is_none());
        assert!(ProductDetailView::build(true, None, None).is_none());
        assert!(ProductDetailView::build(true, Some(product(true)), None).is_some());
    }

    #[test]
    fn test_add_to_cart_requires_customer_and_stock() {
        let customer = user(UserRole::Customer);
        let merchant = user(UserRole::Merchant);

        let view =
            ProductDetailView::build(true, Some(product(true)), Some(&customer)).unwrap();
        assert_eq!(view.primary_action, PrimaryAction::AddToCart);

        // Out of stock: degrades for everyone
        let view =
            ProductDetailView::build(true, Some(product(false)), Some(&customer)).unwrap();
        assert_eq!(view.primary_action, PrimaryAction::ViewOnly);

        // Wrong role
        let view =
            ProductDetailView::build(true, Some(product(true)), Some(&merchant)).unwrap();
        assert_eq!(view.primary_action, PrimaryAction::ViewOnly);

        // No user at all
        let view = ProductDetailView::build(true, Some(product(true)), None).unwrap();
        assert_eq!(view.primary_action, PrimaryAction::ViewOnly);
    }

    #[test]
    fn test_primary_action_always_carries_price() {
        let view = ProductDetailView::build(true, Some(product(false)), None).unwrap();
        assert_eq!(view.price, "$4.99");
    }

    #[test]
    fn test_modal_renders_placeholder_when_image_missing() {
        let mut missing = product(true);
        missing.image = None;
        let view = ProductDetailView::build(true, Some(missing), None).unwrap();
        let html = ProductModalTemplate { view }.render().unwrap();

        assert!(html.contains(IMAGE_PLACEHOLDER));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_modal_renders_image_when_present() {
        let view = ProductDetailView::build(true, Some(product(true)), None).unwrap();
        let html = ProductModalTemplate { view }.render().unwrap();

        assert!(html.contains("<img"));
        assert!(html.contains("https://cdn.example/p/1.jpg"));
        assert!(!html.contains(IMAGE_PLACEHOLDER));
    }

    #[test]
    fn test_modal_add_to_cart_control_gated() {
        let customer = user(UserRole::Customer);

        let view =
            ProductDetailView::build(true, Some(product(true)), Some(&customer)).unwrap();
        let html = ProductModalTemplate { view }.render().unwrap();
        assert!(html.contains("Add to Cart - $4.99"));

        let view = ProductDetailView::build(true, Some(product(true)), None).unwrap();
        let html = ProductModalTemplate { view }.render().unwrap();
        assert!(!html.contains("Add to Cart"));
        assert!(html.contains("View Product - $4.99"));
    }

    #[test]
    fn test_modal_always_has_close_control() {
        let view = ProductDetailView::build(true, Some(product(false)), None).unwrap();
        let html = ProductModalTemplate { view }.render().unwrap();
        assert!(html.contains("Close"));
    }

    #[test]
    fn test_modal_omits_missing_sections() {
        let mut sparse = product(true);
        sparse.description = None;
        sparse.tags = Vec::new();
        sparse.eco = EcoAttributes::default();
        let view = ProductDetailView::build(true, Some(sparse), None).unwrap();
        let html = ProductModalTemplate { view }.render().unwrap();

        assert!(!html.contains("Description"));
        assert!(!html.contains("Features"));
        // Eco rating still shows, defaulted display
        assert!(html.contains("Eco Rating: 5/5"));
    }

    #[test]
    fn test_modal_stock_status() {
        let view = ProductDetailView::build(true, Some(product(true)), None).unwrap();
        assert!(ProductModalTemplate { view }.render().unwrap().contains("In Stock"));

        let view = ProductDetailView::build(true, Some(product(false)), None).unwrap();
        assert!(
            ProductModalTemplate { view }
                .render()
                .unwrap()
                .contains("Out of Stock")
        );
    }
}
