//! Macros to reduce boilerplate in layer implementations

/// Implements the property accessors of `LayerTrait` for a layer that
/// keeps its `LayerProperties` in a field.
///
/// Usage:
/// ```ignore
/// impl LayerTrait for MyLayer {
///     georect::impl_layer_properties!(properties);
///     // tiles(), options(), set_options() ...
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_properties {
    ($properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
        }

        fn opacity(&self) -> f32 {
            self.$properties_field.opacity
        }

        fn set_opacity(&mut self, opacity: f32) {
            self.$properties_field.opacity = opacity.clamp(0.0, 1.0);
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    };
}
