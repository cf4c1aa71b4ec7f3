//! Product body construction

use podpublish_domain::{ImagePlacement, Placeholder, PrintArea, ProductBody, PublishConfig, VariantPrice};

use crate::catalog::CatalogSelection;

/// Build the create-product payload for one uploaded design.
///
/// Every chosen variant is priced at `config.price_cents` and shares a
/// single print area whose placeholder holds the image.
pub fn build_product_body(
    title_stem: &str,
    image_id: &str,
    selection: &CatalogSelection,
    config: &PublishConfig,
) -> ProductBody {
    let placement = &config.placement;

    ProductBody {
        title: format!("{title_stem}{}", config.title_suffix),
        description: format!(
            "{} - Colors: {}. Sizes: {}.",
            config.product_label,
            selection.chosen_colors().join(", "),
            selection.chosen_sizes().join(", "),
        ),
        blueprint_id: selection.blueprint_id,
        print_provider_id: selection.provider.id,
        variants: selection
            .chosen
            .iter()
            .map(|variant| VariantPrice { id: variant.id, price: config.price_cents })
            .collect(),
        print_areas: vec![PrintArea {
            variant_ids: selection.chosen_ids(),
            placeholders: vec![Placeholder {
                position: placement.position.clone(),
                images: vec![ImagePlacement {
                    id: image_id.to_string(),
                    x: placement.x,
                    y: placement.y,
                    scale: placement.scale,
                    angle: placement.angle,
                }],
            }],
        }],
    }
}

#[cfg(test)]
mod tests {
    use podpublish_domain::{PrintProvider, VariantOption};
    use serde_json::json;

    use super::*;

    fn selection() -> CatalogSelection {
        let chosen = vec![
            VariantOption { id: 11, size: "XL".into(), color: "White".into(), is_available: true },
            VariantOption { id: 12, size: "S".into(), color: "Black".into(), is_available: true },
        ];
        CatalogSelection {
            blueprint_id: 145,
            provider: PrintProvider { id: 29, title: "Monster Digital".into() },
            variants: chosen.clone(),
            available_colors: vec!["Black".into(), "White".into()],
            chosen,
        }
    }

    #[test]
    fn body_uses_configured_template() {
        let body = build_product_body("sunset", "img-1", &selection(), &PublishConfig::default());

        assert_eq!(body.title, "sunset - Gildan 64000");
        assert_eq!(
            body.description,
            "Gildan 64000 T-Shirt - Colors: Black, White. Sizes: S, XL."
        );
        assert_eq!(body.blueprint_id, 145);
        assert_eq!(body.print_provider_id, 29);
        assert_eq!(
            body.variants,
            vec![VariantPrice { id: 11, price: 2999 }, VariantPrice { id: 12, price: 2999 }]
        );
    }

    #[test]
    fn body_serializes_to_vendor_shape() {
        let body = build_product_body("sunset", "img-1", &selection(), &PublishConfig::default());
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value["print_areas"],
            json!([{
                "variant_ids": [11, 12],
                "placeholders": [{
                    "position": "front",
                    "images": [{"id": "img-1", "x": 0.5, "y": 0.5, "scale": 0.9, "angle": 0.0}]
                }]
            }])
        );
    }

    #[test]
    fn placement_and_price_follow_config() {
        let mut config = PublishConfig::default();
        config.price_cents = 2499;
        config.placement.position = "back".into();
        config.placement.scale = 1.0;

        let body = build_product_body("x", "img", &selection(), &config);
        assert!(body.variants.iter().all(|variant| variant.price == 2499));
        let placeholder = &body.print_areas[0].placeholders[0];
        assert_eq!(placeholder.position, "back");
        assert_eq!(placeholder.images[0].scale, 1.0);
    }
}
