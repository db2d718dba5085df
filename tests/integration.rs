//! Integration tests for tweet sentiment analysis

use std::io::Cursor;

use tempfile::tempdir;
use tweet_sentiment::{
    export_results, filter_by_keyword, ChartRenderer, CollectionRunner, Menu, PolarityAnalyzer,
    Scorer, Sentiment, SentimentRecord, Statistics, PREDEFINED_TWEETS,
};

/// Deterministic polarity source keyed on marker words
struct MarkerAnalyzer;

impl PolarityAnalyzer for MarkerAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let text = text.to_lowercase();
        if text.contains("love") || text.contains("fantastic") || text.contains("amazing") {
            0.75
        } else if text.contains("terrible") || text.contains("tired") {
            -0.5
        } else {
            0.0
        }
    }
}

mod scoring {
    use super::*;

    #[test]
    fn test_end_to_end_labels_with_lexicon() {
        let scorer = Scorer::new();
        let records = scorer.score_all(&[
            "I love programming!",
            "The weather is terrible today.",
            "Today is an average day.",
        ]);

        let labels: Vec<_> = records.iter().map(|r| r.sentiment()).collect();
        assert_eq!(
            labels,
            vec![Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
        );
    }

    #[test]
    fn test_label_matches_score_sign_for_all_predefined() {
        let scorer = Scorer::new();

        for record in scorer.score_all(&PREDEFINED_TWEETS) {
            assert!((-1.0..=1.0).contains(&record.score()));
            assert_eq!(record.sentiment(), Sentiment::from_score(record.score()));
        }
    }

    #[test]
    fn test_stub_analyzer_through_scorer() {
        let scorer = Scorer::with_analyzer(MarkerAnalyzer);

        assert_eq!(scorer.score("I LOVE it"), (Sentiment::Positive, 0.75));
        assert_eq!(scorer.score("so tired"), (Sentiment::Negative, -0.5));
        assert_eq!(scorer.score(""), (Sentiment::Neutral, 0.0));
    }
}

mod reporting {
    use super::*;

    #[test]
    fn test_export_record_count_and_replacement() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sentiment_analysis_results.txt");
        let scorer = Scorer::with_analyzer(MarkerAnalyzer);

        let first = scorer.score_all(&PREDEFINED_TWEETS);
        export_results(&first, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Tweet: ").count(), 7);
        assert_eq!(content.lines().count(), 7 * 3);

        let second = scorer.score_all(&["only one"]);
        export_results(&second, &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Tweet: only one\nSentiment: Neutral (Score: 0.0)\n\n"
        );
    }

    #[test]
    fn test_statistics_of_stub_predefined() {
        let scorer = Scorer::with_analyzer(MarkerAnalyzer);
        let records = scorer.score_all(&PREDEFINED_TWEETS);

        // love, amazing, fantastic / terrible, tired / the rest
        let stats = Statistics::from_records(&records);
        let text = stats.to_string();
        assert!(text.contains("Total Tweets Analyzed: 7"));
        assert!(text.contains("Positive Tweets: 3 (42.86%)"));
        assert!(text.contains("Negative Tweets: 2 (28.57%)"));
        assert!(text.contains("Neutral Tweets: 2 (28.57%)"));
    }

    #[test]
    fn test_statistics_no_data() {
        let records: Vec<SentimentRecord> = Vec::new();
        let stats = Statistics::from_records(&records);

        assert_eq!(stats, Statistics::NoData);
        assert!(stats.to_string().contains("No tweets analyzed."));
    }

    #[test]
    fn test_charts_for_empty_input() {
        colored::control::set_override(false);
        let renderer = ChartRenderer::new().with_pause(false);
        let mut out = Vec::new();

        renderer.render(&[], &mut Cursor::new(""), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Sentiment Distribution (Bar Chart)"));
        assert!(!output.contains("Sentiment Distribution (Pie Chart)"));
        assert!(output.contains("No data to display in pie chart."));
    }
}

mod filtering {
    use super::*;

    #[test]
    fn test_filter_on_predefined_results() {
        let scorer = Scorer::with_analyzer(MarkerAnalyzer);
        let records = CollectionRunner::new(&scorer)
            .run_predefined(&mut Vec::new())
            .unwrap();

        let matches = filter_by_keyword(&records, "TODAY", &mut Vec::new()).unwrap();
        let texts: Vec<_> = matches.iter().map(|r| r.text()).collect();

        assert_eq!(
            texts,
            vec!["The weather is terrible today.", "Today is an average day."]
        );
    }

    #[test]
    fn test_empty_keyword_returns_everything_in_order() {
        let scorer = Scorer::with_analyzer(MarkerAnalyzer);
        let records = scorer.score_all(&PREDEFINED_TWEETS);

        let matches = filter_by_keyword(&records, "", &mut Vec::new()).unwrap();
        assert_eq!(matches, records);
    }
}

mod menu_loop {
    use super::*;

    fn run_script(script: &str, export: &std::path::Path) -> String {
        colored::control::set_override(false);
        let menu = Menu::new(
            Scorer::with_analyzer(MarkerAnalyzer),
            ChartRenderer::new(),
            export,
        );
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        menu.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_predefined_flow_runs_every_step() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        // choice, Enter after the bar chart, Enter after the pie chart, exit
        let output = run_script("1\n\n\n4\n", &path);

        let saved = output.find("Results saved to").unwrap();
        let bar = output.find("Sentiment Distribution (Bar Chart)").unwrap();
        let pie = output.find("Sentiment Distribution (Pie Chart)").unwrap();
        let stats = output.find("Statistical Overview:").unwrap();
        assert!(saved < bar && bar < pie && pie < stats);

        assert_eq!(output.matches("Press Enter to continue...").count(), 2);
        assert!(output.ends_with("Exiting the program. Goodbye!\n"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap().matches("Tweet: ").count(),
            7
        );
    }

    #[test]
    fn test_user_flow_collects_until_exit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let output = run_script("2\nI love tests\nso tired\nEXIT\n\n\n4\n", &path);

        assert!(output.contains("Sentiment: Positive (Score: 0.75)"));
        assert!(output.contains("Sentiment: Negative (Score: -0.5)"));
        assert!(output.contains("Total Tweets Analyzed: 2"));
        assert!(output.contains("Positive Tweets: 1 (50.00%)"));

        let exported = std::fs::read_to_string(&path).unwrap();
        assert!(exported.starts_with("Tweet: I love tests\n"));
        assert!(exported.contains("Tweet: so tired\n"));
    }

    #[test]
    fn test_user_flow_immediate_exit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        // Enter only after the bar chart: the pie is replaced by a notice
        let output = run_script("2\nexit\n\n4\n", &path);

        assert!(output.contains("No tweets analyzed."));
        assert_eq!(output.matches("Press Enter to continue...").count(), 1);
        assert!(output.ends_with("Exiting the program. Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice() {
        let dir = tempdir().unwrap();
        let output = run_script("5\n4\n", &dir.path().join("results.txt"));

        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(output.matches("1. Analyze Predefined Tweets").count(), 2);
    }

    #[test]
    fn test_filter_flow_is_asymmetric() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let output = run_script("3\ncoffee\n\n\n4\n", &path);

        assert!(output.contains("Tweets containing the keyword 'coffee':"));
        assert!(output.contains("Sentiment Distribution (Pie Chart)"));
        assert!(!output.contains("Results saved to"));
        assert!(!output.contains("Statistical Overview:"));
        assert!(!path.exists());
    }
}
