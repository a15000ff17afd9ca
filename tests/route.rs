mod tests {
    use myrtio_ring_lamp::{ColorChannel, LampCommand, PatternId, Route, Step};

    #[test]
    fn test_parse_fixed_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Index));
        assert_eq!(Route::parse("/on"), Some(Route::On));
        assert_eq!(Route::parse("/off"), Some(Route::Off));
        assert_eq!(Route::parse("/static"), Some(Route::Pattern(PatternId::Static)));
        assert_eq!(Route::parse("/rotate"), Some(Route::Pattern(PatternId::Rotate)));
        assert_eq!(
            Route::parse("/heartbeat"),
            Some(Route::Pattern(PatternId::Heartbeat))
        );
        assert_eq!(
            Route::parse("/brightness/inc"),
            Some(Route::Brightness(Step::Increase))
        );
        assert_eq!(
            Route::parse("/brightness/dec"),
            Some(Route::Brightness(Step::Decrease))
        );
        assert_eq!(
            Route::parse("/r/dec"),
            Some(Route::Channel(ColorChannel::Red, Step::Decrease))
        );
        assert_eq!(
            Route::parse("/g/inc"),
            Some(Route::Channel(ColorChannel::Green, Step::Increase))
        );
        assert_eq!(
            Route::parse("/b/inc"),
            Some(Route::Channel(ColorChannel::Blue, Step::Increase))
        );
    }

    #[test]
    fn test_parse_palette_index() {
        assert_eq!(Route::parse("/color/0"), Some(Route::Color(0)));
        assert_eq!(Route::parse("/color/1"), Some(Route::Color(1)));
        assert_eq!(Route::parse("/color/17"), Some(Route::Color(17)));
        assert_eq!(Route::parse("/color/39"), Some(Route::Color(39)));
    }

    #[test]
    fn test_palette_index_clamps() {
        assert_eq!(Route::parse("/color/40"), Some(Route::Color(39)));
        assert_eq!(
            Route::parse("/color/99999999999999999999999999"),
            Some(Route::Color(39))
        );
    }

    #[test]
    fn test_rejects_malformed_palette_index() {
        assert_eq!(Route::parse("/color/"), None);
        assert_eq!(Route::parse("/color"), None);
        assert_eq!(Route::parse("/color/abc"), None);
        assert_eq!(Route::parse("/color/-1"), None);
        assert_eq!(Route::parse("/color/1a"), None);
        assert_eq!(Route::parse("/color/7/extra"), None);
    }

    #[test]
    fn test_rejects_unknown_paths() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("on"), None);
        assert_eq!(Route::parse("/unknown"), None);
        assert_eq!(Route::parse("/brightness"), None);
        assert_eq!(Route::parse("/brightness/up"), None);
        assert_eq!(Route::parse("/x/inc"), None);
        assert_eq!(Route::parse("/on/inc"), None);
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert_eq!(Route::parse("/on?from=page"), Some(Route::On));
        assert_eq!(Route::parse("/?"), Some(Route::Index));
    }

    #[test]
    fn test_route_commands() {
        assert_eq!(Route::Index.command(), None);
        assert_eq!(Route::On.command(), Some(LampCommand::PowerOn));
        assert_eq!(Route::Off.command(), Some(LampCommand::PowerOff));
        assert_eq!(
            Route::Color(7).command(),
            Some(LampCommand::SelectPaletteColor(7))
        );
        assert_eq!(
            Route::Channel(ColorChannel::Blue, Step::Increase).command(),
            Some(LampCommand::AdjustChannel(ColorChannel::Blue, Step::Increase))
        );
    }

    #[test]
    fn test_write_path() {
        let mut path = String::new();
        Route::Color(17).write_path(&mut path).unwrap();
        assert_eq!(path, "/color/17");

        path.clear();
        Route::Channel(ColorChannel::Green, Step::Decrease)
            .write_path(&mut path)
            .unwrap();
        assert_eq!(path, "/g/dec");
    }
}
