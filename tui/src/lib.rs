//! TUI rendering for the Apps view using ratatui.

mod input;
mod theme;
mod widgets;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, shimmer_offset, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use appview_engine::{App, BodyPlan, ListingState, PagePlan, RenderMode, UiOptions};

use self::widgets::{
    HEADER_HEIGHT, RenderCtx, draw_header, draw_listing, draw_onboarding, draw_skeleton,
};

/// Body content never grows wider than this many columns.
pub const MAX_BODY_WIDTH: u16 = 100;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let [page_area, status_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
        .margin(1)
        .areas(frame.area());

    match (app.page(), app.plan()) {
        (Some(page), Some(plan)) => {
            draw_page(
                frame,
                page_area,
                &plan,
                page.listing(),
                options,
                app.tick_count(),
            );
        }
        _ => {
            let idle = Paragraph::new(Span::styled(
                "No page is open",
                Style::default().fg(palette.text_muted),
            ));
            frame.render_widget(idle, page_area);
        }
    }

    draw_status_bar(frame, app, status_area, &palette);
}

/// Render a composed page into `area`.
///
/// Draws exactly what `plan` describes. The listing is only consulted in
/// listing mode.
pub fn draw_page(
    frame: &mut Frame,
    area: Rect,
    plan: &PagePlan,
    listing: &ListingState,
    options: UiOptions,
    tick: usize,
) {
    let palette = palette(options);
    let glyphs = glyphs(options);
    let ctx = RenderCtx {
        palette: &palette,
        glyphs: &glyphs,
        options,
        tick,
    };

    let area = centered_column(area, MAX_BODY_WIDTH);
    let [header_area, _, body_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    draw_header(frame, header_area, &plan.header, &ctx);
    match &plan.body {
        BodyPlan::Skeleton => draw_skeleton(frame, body_area, &ctx),
        BodyPlan::Onboarding => draw_onboarding(frame, body_area, &ctx),
        BodyPlan::Listing { status_menu, apps } => {
            draw_listing(frame, body_area, status_menu, *apps, listing, &ctx);
        }
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn mode_label(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Loading => "checking production",
        RenderMode::Onboarding => "onboarding",
        RenderMode::Listing => "apps",
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let left = if let Some(msg) = app.status_message() {
        Span::styled(msg.to_string(), Style::default().fg(palette.text_secondary))
    } else if let Some(page) = app.page() {
        let filter = if page.archived_filter().is_archived() {
            "archived"
        } else {
            "active"
        };
        Span::styled(
            format!("{} │ {} │ {filter}", page.env(), mode_label(page.mode())),
            Style::default().fg(palette.primary),
        )
    } else {
        Span::raw("")
    };

    let mut hints = Vec::new();
    for (key, label) in [
        ("a", "archived"),
        ("r", "reload"),
        ("s", "sync"),
        ("q", "quit"),
    ] {
        hints.push(Span::styled(key, styles::key_highlight(palette)));
        hints.push(Span::styled(
            format!(" {label}  "),
            styles::key_hint(palette),
        ));
    }
    let hints_width = hints.iter().map(Span::width).sum::<usize>();
    let hints_width = u16::try_from(hints_width).unwrap_or(u16::MAX);

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), left])),
        left_area,
    );
    frame.render_widget(Paragraph::new(Line::from(hints)), right_area);
}
