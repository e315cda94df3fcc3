//! Widgets for the collaborators the Apps page composes: header, loading
//! skeleton, onboarding card with FAQ, status menu and apps listing.
//!
//! Every function here draws what it is given. None of them fetch data or
//! decide which mode the page is in.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use appview_engine::ListingState;
use appview_types::{AppSummary, AppsProps, HeaderPlan, StatusMenuProps, ui::UiOptions};

use crate::theme::{Glyphs, Palette, shimmer_offset, styles};

pub(crate) struct RenderCtx<'a> {
    pub(crate) palette: &'a Palette,
    pub(crate) glyphs: &'a Glyphs,
    pub(crate) options: UiOptions,
    pub(crate) tick: usize,
}

pub(crate) const HEADER_HEIGHT: u16 = 3;

const ONBOARDING_TITLE: &str = " Sync your first app ";
const ONBOARDING_BODY: &[&str] = &[
    "There are no apps in your production environment yet.",
    "",
    "Deploy your code, then sync the URL it serves functions from.",
    "Each sync registers the app and its functions with this environment.",
];

const FAQ: &[(&str, &str)] = &[
    (
        "What is an app?",
        "A deployed service that serves one or more functions, usually one product.",
    ),
    (
        "What is a sync?",
        "A record of the functions an app serves at a URL. Unlinked ones are unattached syncs.",
    ),
    (
        "Why am I seeing this page?",
        "No apps or syncs were found in your production environment.",
    ),
];

fn muted(palette: &Palette) -> Style {
    Style::default().fg(palette.text_muted)
}

fn secondary(palette: &Palette) -> Style {
    Style::default().fg(palette.text_secondary)
}

fn card(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1))
}

fn titled_card(title: &'static str, palette: &Palette) -> Block<'static> {
    card(palette).title(Span::styled(title, styles::card_title(palette)))
}

pub(crate) fn draw_header(frame: &mut Frame, area: Rect, header: &HeaderPlan, ctx: &RenderCtx) {
    let palette = ctx.palette;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.bg_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_row, info_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    let button = header
        .action
        .as_ref()
        .map(|action| format!(" {} {} ", ctx.glyphs.add, action.label));
    let button_width = button.as_deref().map_or(0, UnicodeWidthStr::width) as u16;
    let [crumb_area, button_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)]).areas(title_row);

    let crumb = Line::from(vec![
        Span::styled(header.breadcrumb, styles::breadcrumb(palette)),
        Span::raw(" "),
        Span::styled(ctx.glyphs.info, muted(palette)),
    ]);
    frame.render_widget(Paragraph::new(crumb), crumb_area);

    if let Some(button) = button {
        let button = Span::styled(button, styles::primary_button(palette));
        frame.render_widget(
            Paragraph::new(button).alignment(Alignment::Right),
            button_area,
        );
    }

    let info = Line::from(vec![
        Span::styled(header.info.text, muted(palette)),
        Span::raw(" "),
        Span::styled(header.info.link_label, styles::link(palette)),
        Span::styled(format!(" {} ", ctx.glyphs.link), muted(palette)),
        Span::styled(header.info.link_href.clone(), muted(palette)),
    ]);
    frame.render_widget(Paragraph::new(info), info_row);
}

fn skeleton_line(width: usize, glint: Option<usize>, ctx: &RenderCtx) -> Line<'static> {
    let glyphs = ctx.glyphs;
    let fill = Style::default().fg(ctx.palette.bg_highlight);
    let shine = Style::default().fg(ctx.palette.bg_border);
    match glint {
        Some(at) if at < width => Line::from(vec![
            Span::styled(glyphs.skeleton_fill.repeat(at), fill),
            Span::styled(glyphs.skeleton_glint, shine),
            Span::styled(glyphs.skeleton_fill.repeat(width - at - 1), fill),
        ]),
        _ => Line::from(Span::styled(glyphs.skeleton_fill.repeat(width), fill)),
    }
}

/// Placeholder card shown while the production-apps check is pending.
pub(crate) fn draw_skeleton(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let block = card(ctx.palette);
    let height = area.height.min(7);
    let area = Rect { height, ..area };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let full = usize::from(inner.width);
    // Title bar, then two body rows of decreasing length.
    let widths = [full / 3, 0, full, full * 3 / 4, full / 2];
    let lines: Vec<Line> = widths
        .iter()
        .take(usize::from(inner.height))
        .enumerate()
        .map(|(row, &width)| {
            let glint = shimmer_offset(ctx.tick + row * 4, width, ctx.options);
            skeleton_line(width, glint, ctx)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Empty-state onboarding card followed by the FAQ.
pub(crate) fn draw_onboarding(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let palette = ctx.palette;
    let card_height = ONBOARDING_BODY.len() as u16 + 4;
    let [card_area, _, faq_area] = Layout::vertical([
        Constraint::Length(card_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let mut lines: Vec<Line> = ONBOARDING_BODY
        .iter()
        .map(|text| Line::from(Span::styled(*text, secondary(palette))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", styles::key_hint(palette)),
        Span::styled("s", styles::key_highlight(palette)),
        Span::styled(" to sync a new app", styles::key_hint(palette)),
    ]));
    let onboarding = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(titled_card(ONBOARDING_TITLE, palette));
    frame.render_widget(onboarding, card_area);

    let mut faq: Vec<Line> = Vec::new();
    for (index, (question, answer)) in FAQ.iter().enumerate() {
        if index > 0 {
            faq.push(Line::from(""));
        }
        faq.push(Line::from(vec![
            Span::styled(format!("{} ", ctx.glyphs.bullet), muted(palette)),
            Span::styled(*question, styles::breadcrumb(palette)),
        ]));
        faq.push(Line::from(Span::styled(
            format!("  {answer}"),
            secondary(palette),
        )));
    }
    let faq = Paragraph::new(faq)
        .wrap(Wrap { trim: false })
        .block(titled_card(" FAQ ", palette));
    frame.render_widget(faq, faq_area);
}

fn status_menu_line<'a>(menu: &StatusMenuProps, ctx: &RenderCtx) -> Line<'a> {
    let palette = ctx.palette;
    let option = |label: &'static str, selected: bool| {
        let radio = if selected {
            ctx.glyphs.radio_on
        } else {
            ctx.glyphs.radio_off
        };
        let style = if selected {
            styles::selected_option(palette)
        } else {
            secondary(palette)
        };
        Span::styled(format!(" {radio} {label} "), style)
    };

    Line::from(vec![
        Span::styled("Status ", muted(palette)),
        option("Active", !menu.archived),
        Span::raw(" "),
        option("Archived", menu.archived),
        Span::styled("   ", muted(palette)),
        Span::styled("a", styles::key_highlight(palette)),
        Span::styled(" switch", styles::key_hint(palette)),
    ])
}

fn app_line<'a>(app: &AppSummary, ctx: &RenderCtx) -> Line<'a> {
    let palette = ctx.palette;
    let functions = match app.function_count {
        1 => "1 function".to_string(),
        n => format!("{n} functions"),
    };
    let mut spans = vec![
        Span::styled(
            format!("{} ", ctx.glyphs.app),
            Style::default().fg(palette.accent),
        ),
        Span::styled(app.name.clone(), Style::default().fg(palette.text_primary)),
        Span::styled(format!("  {functions}"), muted(palette)),
    ];
    if let Some(url) = &app.url {
        spans.push(Span::styled(format!("  {url}"), muted(palette)));
    }
    if let Some(synced) = &app.last_synced_at {
        spans.push(Span::styled(format!("  synced {synced}"), muted(palette)));
    }
    Line::from(spans)
}

fn listing_lines<'a>(apps: AppsProps, listing: &'a ListingState, ctx: &RenderCtx) -> Vec<Line<'a>> {
    let palette = ctx.palette;
    let error = Style::default().fg(palette.error);
    match listing {
        ListingState::Loading => vec![Line::from(Span::styled(
            "Loading apps...",
            muted(palette),
        ))],
        ListingState::Failed(message) => vec![Line::from(vec![
            Span::styled(format!("{} ", ctx.glyphs.error), error),
            Span::styled(format!("Failed to load apps: {message}"), error),
        ])],
        ListingState::Ready(_) => match listing.matching(apps.is_archived) {
            Some(matching) if !matching.is_empty() => {
                matching.into_iter().map(|app| app_line(app, ctx)).collect()
            }
            _ => {
                let kind = if apps.is_archived {
                    "archived"
                } else {
                    "active"
                };
                vec![Line::from(Span::styled(
                    format!("No {kind} apps"),
                    muted(palette),
                ))]
            }
        },
    }
}

/// Status filter control plus the apps listing.
pub(crate) fn draw_listing(
    frame: &mut Frame,
    area: Rect,
    status_menu: &StatusMenuProps,
    apps: AppsProps,
    listing: &ListingState,
    ctx: &RenderCtx,
) {
    let [menu_area, _, apps_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let menu = Paragraph::new(status_menu_line(status_menu, ctx));
    frame.render_widget(menu, menu_area);

    let title = if apps.is_archived {
        " Archived apps "
    } else {
        " Active apps "
    };
    let listing =
        Paragraph::new(listing_lines(apps, listing, ctx)).block(titled_card(title, ctx.palette));
    frame.render_widget(listing, apps_area);
}
