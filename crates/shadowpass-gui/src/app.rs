//! Main application component.

use crate::components::activity_pane::{ActivityPane, ActivityPaneInput};
use crate::components::common;
use crate::components::strength_meter::{StrengthMeter, StrengthMeterInput};
use crate::config::Config;
use shadowpass_core::record;
use shadowpass_core::{SaveRequest, Session};

use gtk4::gdk;
use gtk4::prelude::*;
use relm4::prelude::*;
use std::path::PathBuf;

/// Main app messages.
#[derive(Debug)]
pub enum AppInput {
    /// Length field edited.
    LengthChanged(String),
    /// Tag field edited.
    TagChanged(String),
    /// Put the tag into the banner.
    ApplyTag,
    /// Password field edited by hand.
    PasswordEdited(String),
    Generate,
    Copy,
    /// Start a save; opens the file chooser.
    Save,
    /// File chooser closed. `None` when cancelled.
    SaveTargetChosen(Option<PathBuf>),
    Clear,
    ToggleVisibility,
    Quit,
}

/// Main application model.
pub struct App {
    config: Config,
    session: Session,
    /// Number of log entries already sent to the activity pane.
    logged: usize,
    pending_save: Option<SaveRequest>,
    file_chooser: Option<gtk4::FileChooserNative>,

    // Child components
    strength_meter: Controller<StrengthMeter>,
    activity_pane: Controller<ActivityPane>,
}

#[relm4::component(pub)]
impl Component for App {
    type Init = Config;
    type Input = AppInput;
    type Output = ();
    type CommandOutput = ();

    view! {
        #[name = "main_window"]
        gtk4::ApplicationWindow {
            set_title: Some("ShadowPass — H4x0r Toolkit"),
            set_default_width: model.config.window_width,
            set_default_height: model.config.window_height,
            add_css_class: "shadowpass",

            gtk4::Box {
                set_orientation: gtk4::Orientation::Vertical,
                set_spacing: 6,
                set_margin_all: 12,

                // Header: banner on the left, tag controls on the right
                gtk4::CenterBox {
                    set_hexpand: true,

                    #[wrap(Some)]
                    set_start_widget = &gtk4::Label {
                        #[watch]
                        set_label: &model.session.banner_title(),
                        add_css_class: "banner",
                    },

                    #[wrap(Some)]
                    set_end_widget = &gtk4::Box {
                        set_orientation: gtk4::Orientation::Horizontal,
                        set_spacing: 6,

                        gtk4::Button {
                            set_label: "Apply Tag",
                            add_css_class: "accent-button",
                            connect_clicked => AppInput::ApplyTag,
                        },

                        gtk4::Entry {
                            set_width_chars: 30,
                            set_text: model.session.tag_input(),
                            connect_changed[sender] => move |entry| {
                                sender.input(AppInput::TagChanged(entry.text().to_string()));
                            },
                            connect_activate => AppInput::ApplyTag,
                        },
                    },
                },

                gtk4::Box {
                    set_orientation: gtk4::Orientation::Horizontal,
                    set_spacing: 12,
                    set_vexpand: true,

                    // Left: controls
                    gtk4::Box {
                        set_orientation: gtk4::Orientation::Vertical,
                        set_spacing: 8,
                        set_width_request: 380,
                        add_css_class: "panel",

                        gtk4::Label {
                            set_label: "Password (enter or generate):",
                            set_halign: gtk4::Align::Start,
                        },

                        #[name = "password_entry"]
                        gtk4::Entry {
                            set_hexpand: true,
                            add_css_class: "monospace",
                            #[watch]
                            set_visibility: !model.session.visibility().is_masked(),
                            connect_changed[sender] => move |entry| {
                                sender.input(AppInput::PasswordEdited(entry.text().to_string()));
                            },
                        },

                        gtk4::Button {
                            set_halign: gtk4::Align::End,
                            #[watch]
                            set_label: model.session.visibility().toggle_label(),
                            connect_clicked => AppInput::ToggleVisibility,
                        },

                        model.strength_meter.widget().clone() {},

                        // Length + actions
                        gtk4::Box {
                            set_orientation: gtk4::Orientation::Horizontal,
                            set_spacing: 8,
                            set_margin_top: 6,

                            gtk4::Label {
                                set_label: "Len:",
                                add_css_class: "dim-label",
                            },

                            gtk4::Entry {
                                set_width_chars: 6,
                                set_text: model.session.length_input(),
                                add_css_class: "monospace",
                                connect_changed[sender] => move |entry| {
                                    sender.input(AppInput::LengthChanged(entry.text().to_string()));
                                },
                                connect_activate => AppInput::Generate,
                            },

                            gtk4::Button {
                                set_label: "Generate",
                                add_css_class: "accent-button",
                                connect_clicked => AppInput::Generate,
                            },

                            gtk4::Button {
                                set_label: "Copy",
                                add_css_class: "copy-button",
                                connect_clicked => AppInput::Copy,
                            },

                            gtk4::Button {
                                set_label: "Save",
                                add_css_class: "save-button",
                                connect_clicked => AppInput::Save,
                            },
                        },

                        gtk4::CenterBox {
                            #[wrap(Some)]
                            set_start_widget = &gtk4::Button {
                                set_label: "Clear",
                                connect_clicked => AppInput::Clear,
                            },

                            #[wrap(Some)]
                            set_end_widget = &gtk4::Button {
                                set_label: "Exit",
                                add_css_class: "destructive-action",
                                connect_clicked => AppInput::Quit,
                            },
                        },
                    },

                    // Right: activity log
                    gtk4::Box {
                        set_hexpand: true,
                        add_css_class: "panel",

                        model.activity_pane.widget().clone() {},
                    },
                },

                gtk4::Label {
                    set_label: "For learning & portfolio. Do not use for malicious activity.",
                    add_css_class: "dim-label",
                    add_css_class: "caption",
                },
            },
        }
    }

    fn init(
        config: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let strength_meter = StrengthMeter::builder()
            .launch(config.show_strength_bar)
            .detach();
        let activity_pane = ActivityPane::builder().launch(()).detach();

        let mut model = App {
            session: Session::new(config.session_settings()),
            config,
            logged: 0,
            pending_save: None,
            file_chooser: None,
            strength_meter,
            activity_pane,
        };
        model.refresh_children();

        let widgets = view_output!();

        // Load CSS
        let provider = gtk4::CssProvider::new();
        provider.load_from_data(include_str!("style.css"));
        if let Some(display) = gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }

        // Window-wide shortcuts
        let key_controller = gtk4::EventControllerKey::new();
        key_controller.set_propagation_phase(gtk4::PropagationPhase::Capture);
        let sender_clone = sender.clone();
        key_controller.connect_key_pressed(move |_, key, _keycode, state| {
            if !state.contains(gdk::ModifierType::CONTROL_MASK) {
                return gtk4::glib::Propagation::Proceed;
            }
            // Ctrl+G generates, Ctrl+S saves
            if key == gdk::Key::g || key == gdk::Key::G {
                sender_clone.input(AppInput::Generate);
                return gtk4::glib::Propagation::Stop;
            }
            if key == gdk::Key::s || key == gdk::Key::S {
                sender_clone.input(AppInput::Save);
                return gtk4::glib::Propagation::Stop;
            }
            gtk4::glib::Propagation::Proceed
        });
        widgets.main_window.add_controller(key_controller);

        ComponentParts { model, widgets }
    }

    fn update_with_view(
        &mut self,
        widgets: &mut Self::Widgets,
        message: Self::Input,
        sender: ComponentSender<Self>,
        root: &Self::Root,
    ) {
        match message {
            AppInput::LengthChanged(text) => {
                self.session.set_length_input(text);
            }
            AppInput::TagChanged(text) => {
                self.session.set_tag_input(text);
            }
            AppInput::ApplyTag => {
                self.session.apply_tag();
            }
            AppInput::PasswordEdited(text) => {
                if text != self.session.password() {
                    self.session.edit_password(text);
                }
            }
            AppInput::Generate => match self.session.generate() {
                Ok(_) => self.sync_password_field(widgets),
                Err(e) => common::show_error(root, &e),
            },
            AppInput::Copy => {
                let copied = self.session.copy_with(|text| match gdk::Display::default() {
                    Some(display) => {
                        display.clipboard().set_text(text);
                        Ok(())
                    }
                    None => Err("no display available"),
                });
                match copied {
                    Ok(()) => common::show_notice(
                        root,
                        gtk4::MessageType::Info,
                        "Copied",
                        "Password copied to clipboard ✅",
                    ),
                    Err(e) => common::show_error(root, &e),
                }
            }
            AppInput::Save => match self.session.begin_save() {
                Ok(request) => self.open_save_dialog(root, request, &sender),
                Err(e) => common::show_error(root, &e),
            },
            AppInput::SaveTargetChosen(path) => {
                self.file_chooser = None;
                if let Some(request) = self.pending_save.take() {
                    let path = path.map(record::with_default_extension);
                    match self.session.finish_save(request, path.as_deref()) {
                        Ok(Some(saved)) => common::show_notice(
                            root,
                            gtk4::MessageType::Info,
                            "Saved",
                            &format!("Saved to {}", saved.display()),
                        ),
                        Ok(None) => {}
                        Err(e) => common::show_error(root, &e),
                    }
                }
            }
            AppInput::Clear => {
                self.session.clear();
                self.sync_password_field(widgets);
            }
            AppInput::ToggleVisibility => {
                self.session.toggle_visibility();
            }
            AppInput::Quit => {
                root.close();
            }
        }

        self.refresh_children();
        // Must call update_view to trigger #[watch] updates when using update_with_view
        self.update_view(widgets, sender);
    }
}

impl App {
    /// Push the session's current strength and new log lines to the children.
    fn refresh_children(&mut self) {
        self.strength_meter
            .emit(StrengthMeterInput::Update(self.session.strength()));

        for entry in &self.session.log().entries()[self.logged..] {
            self.activity_pane
                .emit(ActivityPaneInput::Append(entry.to_string()));
        }
        self.logged = self.session.log().len();
    }

    /// Write the session's password into the entry after a programmatic change.
    fn sync_password_field(&self, widgets: &AppWidgets) {
        if widgets.password_entry.text().as_str() != self.session.password() {
            widgets.password_entry.set_text(self.session.password());
        }
    }

    fn open_save_dialog(
        &mut self,
        root: &gtk4::ApplicationWindow,
        request: SaveRequest,
        sender: &ComponentSender<Self>,
    ) {
        let file_chooser = gtk4::FileChooserNative::new(
            Some("Save Password"),
            Some(root),
            gtk4::FileChooserAction::Save,
            Some("Save"),
            Some("Cancel"),
        );
        file_chooser.set_current_name(&request.suggested_file_name());

        let filter = gtk4::FileFilter::new();
        filter.set_name(Some("Text files"));
        filter.add_pattern("*.txt");
        file_chooser.add_filter(&filter);

        let sender = sender.clone();
        file_chooser.connect_response(move |dialog, response| {
            let path = if response == gtk4::ResponseType::Accept {
                dialog.file().and_then(|file| file.path())
            } else {
                None
            };
            sender.input(AppInput::SaveTargetChosen(path));
        });
        file_chooser.show();

        self.pending_save = Some(request);
        // The native dialog is dropped once nothing holds it
        self.file_chooser = Some(file_chooser);
    }
}
