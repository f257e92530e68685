//! Strength indicator: label plus a progress bar colored by tier.

use gtk4::prelude::*;
use relm4::prelude::*;
use shadowpass_core::Strength;

#[derive(Debug)]
pub enum StrengthMeterInput {
    /// Show a freshly computed strength.
    Update(Strength),
}

pub struct StrengthMeter {
    strength: Strength,
    show_bar: bool,
}

#[relm4::component(pub)]
impl Component for StrengthMeter {
    type Init = bool; // show_strength_bar
    type Input = StrengthMeterInput;
    type Output = ();
    type CommandOutput = ();

    view! {
        gtk4::Box {
            set_orientation: gtk4::Orientation::Vertical,
            set_spacing: 4,

            gtk4::Label {
                set_halign: gtk4::Align::Start,
                #[watch]
                set_label: &format!("Strength: {}", model.strength.label()),
                #[watch]
                set_css_classes: &["strength-label", model.strength.tier().css_class()],
            },

            gtk4::ProgressBar {
                set_hexpand: true,
                set_visible: model.show_bar,
                #[watch]
                set_fraction: model.strength.fraction(),
                #[watch]
                set_css_classes: &["strength-bar", model.strength.tier().css_class()],
                #[watch]
                set_tooltip_text: Some(format!("{}/5", model.strength.score()).as_str()),
            },
        }
    }

    fn init(
        show_bar: Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = StrengthMeter {
            strength: Strength::default(),
            show_bar,
        };

        let widgets = view_output!();
        ComponentParts { model, widgets }
    }

    fn update(&mut self, message: Self::Input, _sender: ComponentSender<Self>, _root: &Self::Root) {
        match message {
            StrengthMeterInput::Update(strength) => {
                self.strength = strength;
            }
        }
    }
}
