use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerVariant {
    Error,
    Success,
}

impl BannerVariant {
    fn color(self) -> Color {
        match self {
            BannerVariant::Error => Color::Red,
            BannerVariant::Success => Color::Green,
        }
    }
}

/// Short-lived notice such as the copy confirmation.
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub variant: BannerVariant,
    pub expires_at: Instant,
}

impl Banner {
    pub fn error(message: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            variant: BannerVariant::Error,
            expires_at: now + ttl,
        }
    }

    pub fn success(message: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            variant: BannerVariant::Success,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Draws the banner in the top-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = self.variant.color();

        // two border columns plus one space of padding on each side
        let box_width = u16::try_from(self.message.chars().count()).unwrap_or(u16::MAX).saturating_add(4).min(area.width);
        let banner_area = Rect {
            x: area.x + area.width.saturating_sub(box_width + 1),
            y: area.y,
            width: box_width,
            height: 3.min(area.height),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        let widget = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(Clear, banner_area);
        frame.render_widget(widget, banner_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let now = Instant::now();
        let banner = Banner::success("Copied!", now, Duration::from_millis(2000));
        assert!(!banner.is_expired(now));
        assert!(!banner.is_expired(now + Duration::from_millis(1999)));
        assert!(banner.is_expired(now + Duration::from_millis(2000)));
    }
}
