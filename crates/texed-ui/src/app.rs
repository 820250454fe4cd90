//! Application state, update and view.

use iced::widget::{column, container, horizontal_space, row, stack, text, Column, Row, Space};
use iced::{
    event, keyboard, mouse, window, Background, Border, Color, Element, Event, Font, Length,
    Padding, Size, Subscription, Task, Theme,
};
use texed_core::gutter::{format_label, gutter_digits, line_number_label};
use texed_core::{Config, InputEvent, Interpreter, Session};

use crate::input;
use crate::theme::{CursorShape, Metrics, Palette};

/// Initial window size, taller than wide like a page of text.
const WINDOW_SIZE: Size = Size::new(600.0, 800.0);

/// Height of the file/mode header.
const HEADER_HEIGHT: f32 = 28.0;

/// Space between the window edge and the text.
const TEXT_PADDING: f32 = 8.0;

/// Everything the window needs at startup.
pub struct Flags {
    pub session: Session,
    pub config: Config,
}

/// Window state.
pub struct App {
    session: Session,
    interpreter: Interpreter,
    config: Config,
    palette: Palette,
    metrics: Metrics,
    window_size: Size,
}

#[derive(Debug, Clone)]
pub enum Message {
    KeyPressed {
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
        text: Option<String>,
    },
    WheelScrolled(mouse::ScrollDelta),
    Resized(Size),
    /// Focus changed or the window was exposed
    Refresh,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags { session, config } = flags;

        let mut app = Self {
            interpreter: Interpreter::from_config(&config),
            palette: Palette::from_config(&config.colors),
            metrics: Metrics::new(config.editor.font_size),
            window_size: WINDOW_SIZE,
            session,
            config,
        };
        app.record_frame();

        (app, Task::none())
    }

    fn title(&self) -> String {
        let name = self
            .session
            .source_name()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "texed".to_string());

        format!("{} [{}] - texed", name, self.session.mode())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let event = match message {
            Message::KeyPressed {
                key,
                modifiers,
                text,
            } => input::key_event(&key, modifiers, text.as_deref(), self.session.mode()),
            Message::WheelScrolled(delta) => {
                let lines = input::wheel_lines(delta, self.metrics.cell.height);
                (lines != 0).then_some(InputEvent::Scroll { lines })
            }
            Message::Resized(size) => {
                self.window_size = size;
                Some(InputEvent::Redraw)
            }
            Message::Refresh => Some(InputEvent::Redraw),
        };

        if let Some(event) = event {
            let changed = self.interpreter.handle(&event, &mut self.session);
            if changed {
                self.record_frame();
            }
        }

        Task::none()
    }

    /// Lines of text that fit below the header.
    fn rows(&self) -> usize {
        let height = self.window_size.height - HEADER_HEIGHT - 2.0 * TEXT_PADDING;
        self.metrics.rows_for_height(height)
    }

    /// Tells the session which lines the next frame draws, so that cursor
    /// movement can keep the cursor inside them.
    fn record_frame(&mut self) {
        let drawn = self.session.visible_range(self.rows());
        self.session.record_rendered(&drawn);
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key,
                modifiers,
                text,
                ..
            }) => Some(Message::KeyPressed {
                key,
                modifiers,
                text: text.map(|t| t.to_string()),
            }),
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                Some(Message::WheelScrolled(delta))
            }
            Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
            Event::Window(window::Event::Focused | window::Event::Unfocused) => {
                Some(Message::Refresh)
            }
            _ => None,
        })
    }

    fn view(&self) -> Element<'_, Message> {
        let palette = self.palette;

        let content = column![self.view_header(), self.view_text()];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.background)),
                ..Default::default()
            })
            .into()
    }

    fn view_header(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let name = self.session.source_name().display().to_string();

        let info = row![
            text(name).size(14).color(palette.foreground),
            horizontal_space(),
            text(self.session.cursor().to_string())
                .size(14)
                .color(palette.alt_foreground),
            Space::with_width(16),
            text(self.session.mode().to_string())
                .size(14)
                .color(palette.cursor),
        ]
        .padding(Padding::from([4, 8]))
        .align_y(iced::Alignment::Center);

        container(info)
            .width(Length::Fill)
            .height(HEADER_HEIGHT)
            .style(move |_| container::Style {
                border: Border {
                    color: palette.border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_text<'a>(&'a self) -> Element<'a, Message> {
        let palette = self.palette;
        let cell = self.metrics.cell;
        let size = self.metrics.font_size;
        let line_height = text::LineHeight::Absolute(cell.height.into());

        let numbers = &self.config.line_numbers;
        let digits = gutter_digits(self.session.buffer().len_lines());
        let cursor_row = self.session.cursor().row();
        let gutter_width = if numbers.enabled {
            (digits + 1) as f32 * cell.width
        } else {
            0.0
        };

        let draw_line = |(idx, line): (usize, &'a str)| -> Element<'a, Message> {
            let mut line_row = Row::new().height(cell.height);
            if numbers.enabled {
                let label = format_label(line_number_label(numbers, idx, cursor_row), digits);
                let color = if idx == cursor_row {
                    palette.foreground
                } else {
                    palette.alt_foreground
                };
                line_row = line_row.push(
                    text(label)
                        .font(Font::MONOSPACE)
                        .size(size)
                        .line_height(line_height)
                        .color(color),
                );
            }
            line_row
                .push(
                    text(line)
                        .font(Font::MONOSPACE)
                        .size(size)
                        .line_height(line_height)
                        .color(palette.foreground),
                )
                .into()
        };
        let lines = self.session.visible_lines(self.rows()).map(draw_line);

        let mut layers = stack![Column::with_children(lines)];
        if self.session.visible_range(self.rows()).contains(&cursor_row) {
            layers = layers.push(self.view_cursor(gutter_width));
        }

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(TEXT_PADDING)
            .into()
    }

    fn view_cursor(&self, gutter_width: f32) -> Element<'_, Message> {
        let palette = self.palette;
        let cell = self.metrics.cell;
        let shape = CursorShape::for_mode(self.session.mode());
        let thickness = self.config.cursor.thickness.max(1) as f32;
        let position = self.session.cursor_screen_position(cell);

        let width = match shape {
            CursorShape::Beam => thickness,
            CursorShape::Hollow | CursorShape::Block => cell.width,
        };
        let border = match shape {
            CursorShape::Hollow => Border {
                color: palette.cursor,
                width: thickness,
                radius: 0.0.into(),
            },
            CursorShape::Beam | CursorShape::Block => Border::default(),
        };
        let fill = palette.cursor_fill(shape);

        let cursor = container(Space::new(width, cell.height)).style(move |_| container::Style {
            background: (fill != Color::TRANSPARENT).then_some(Background::Color(fill)),
            border,
            ..Default::default()
        });

        container(cursor)
            .padding(Padding {
                top: position.y,
                left: gutter_width + position.x,
                right: 0.0,
                bottom: 0.0,
            })
            .into()
    }
}

/// Opens the editor window and runs until it is closed.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(WINDOW_SIZE)
        .theme(|_| Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
