//! The spaced-repetition helper: a notebook that keeps a review schedule in a CSV file
//! next to it and grows each card's interval with every successful review.

use crate::core::models::notebook::Notebook;

const SCHEDULE_FILE: &str = "spaced_cards.csv";

const ADD_CARD: &str = r#"def add_card(question, answer, interval_days=1):
    global df
    new_id = (df['id'].max() + 1) if not df.empty else 1
    next_review = datetime.date.today() + datetime.timedelta(days=interval_days)
    df = pd.concat([df, pd.DataFrame([{
        'id': new_id,
        'question': question,
        'answer': answer,
        'interval_days': interval_days,
        'next_review': next_review,
    }])], ignore_index=True)
    df.to_csv(csv_path, index=False)
    return new_id"#;

const DUE_TODAY: &str = r#"today = datetime.date.today()
due = df[df['next_review'] <= pd.to_datetime(today)]
due"#;

// Ratings: 0 = forgot, 1 = hard, 2 = easy.
const MARK_REVIEWED: &str = r#"def mark_reviewed(card_id, rating):
    global df
    idx = df.index[df['id'] == card_id][0]
    interval = int(df.at[idx, 'interval_days'])
    if rating == 0:
        interval = 1
    elif rating == 1:
        interval = max(1, int(interval * 1.5))
    else:
        interval = max(2, int(interval * 2.5))
    df.at[idx, 'interval_days'] = interval
    df.at[idx, 'next_review'] = pd.to_datetime(datetime.date.today() + datetime.timedelta(days=interval))
    df.to_csv(csv_path, index=False)"#;

fn load_schedule() -> String {
    format!(
        r#"import pandas as pd
import datetime

csv_path = '{}'
try:
    df = pd.read_csv(csv_path, parse_dates=['next_review'])
except FileNotFoundError:
    df = pd.DataFrame(columns=['id', 'question', 'answer', 'interval_days', 'next_review'])

df.head()"#,
        SCHEDULE_FILE
    )
}

pub fn helper() -> Notebook {
    let mut nb = Notebook::new();
    nb.push_markdown("# Spaced Repetition Helper\n")
        .push_markdown(format!(
            "This notebook manages a simple spaced-repetition schedule in `{}`.\n\n\
             Add cards with `add_card`, list what is due, then record each review with \
             `mark_reviewed(card_id, rating)` where rating is 0 (forgot), 1 (hard), or 2 (easy).",
            SCHEDULE_FILE
        ))
        .push_code(load_schedule())
        .push_code(ADD_CARD)
        .push_code(DUE_TODAY)
        .push_code(MARK_REVIEWED);
    nb
}
