//! Read-only console pane listing what the user has done.

use gtk4::prelude::*;
use relm4::prelude::*;

#[derive(Debug)]
pub enum ActivityPaneInput {
    /// Append one formatted line.
    Append(String),
}

pub struct ActivityPane {
    buffer: gtk4::TextBuffer,
    end_mark: gtk4::TextMark,
}

#[relm4::component(pub)]
impl Component for ActivityPane {
    type Init = ();
    type Input = ActivityPaneInput;
    type Output = ();
    type CommandOutput = ();

    view! {
        gtk4::Box {
            set_orientation: gtk4::Orientation::Vertical,
            set_spacing: 4,
            set_vexpand: true,

            gtk4::Label {
                set_label: "Console / Activity Log",
                set_halign: gtk4::Align::Start,
                add_css_class: "heading",
            },

            gtk4::ScrolledWindow {
                set_vexpand: true,
                set_hscrollbar_policy: gtk4::PolicyType::Never,

                #[name = "text_view"]
                gtk4::TextView {
                    set_buffer: Some(&model.buffer),
                    set_editable: false,
                    set_cursor_visible: false,
                    set_wrap_mode: gtk4::WrapMode::WordChar,
                    set_left_margin: 8,
                    set_right_margin: 8,
                    set_top_margin: 8,
                    set_bottom_margin: 8,
                    add_css_class: "monospace",
                    add_css_class: "console",
                },
            },
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let buffer = gtk4::TextBuffer::new(None);
        // Right gravity keeps the mark after appended text.
        let end_mark = buffer.create_mark(Some("end"), &buffer.end_iter(), false);
        let model = ActivityPane { buffer, end_mark };

        let widgets = view_output!();
        ComponentParts { model, widgets }
    }

    fn update_with_view(
        &mut self,
        widgets: &mut Self::Widgets,
        message: Self::Input,
        sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            ActivityPaneInput::Append(line) => {
                let mut end = self.buffer.end_iter();
                self.buffer.insert(&mut end, &line);
                self.buffer.insert(&mut end, "\n");
                widgets.text_view.scroll_mark_onscreen(&self.end_mark);
            }
        }
        self.update_view(widgets, sender);
    }
}
