use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct CloudLayerProps {
    pub pointer_x: f64,
    pub pointer_y: f64,
}

/// Drifting background clouds. The CSS animation loops them across
/// the screen; the pointer position adds a small per-layer parallax
/// shift and blur.
#[function_component(CloudLayer)]
pub fn cloud_layer(props: &CloudLayerProps) -> Html {
    let clouds = (0..3).map(|index| {
        let depth = f64::from(index + 1) * 0.3;
        let shift_x = props.pointer_x * depth * 10.0;
        let shift_y = props.pointer_y * depth * 5.0;
        let style = format!(
            "filter: blur({:.1}px); transform: translate({:.1}px, {:.1}px);",
            depth * 0.5,
            shift_x,
            shift_y
        );
        html! {
            <div class={classes!("cloud", format!("cloud-{index}"))} style={style} />
        }
    });

    html! {
        <div class="cloud-layer" aria-hidden="true">
            { for clouds }
        </div>
    }
}
