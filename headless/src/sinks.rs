use snake_duel_common::{FrameSink, Point, RenderSnapshot, log};

/// Logs one line per presented snapshot.
#[derive(Default)]
pub struct SummarySink {
    pub presented: u64,
}

impl FrameSink for SummarySink {
    fn present(&mut self, snapshot: &RenderSnapshot) -> bool {
        self.presented += 1;
        log!(
            "player {} cells (head {:?}), bot {}, food {:?}",
            snapshot.player.len(),
            snapshot.player.first(),
            snapshot
                .bot
                .as_ref()
                .map_or("absent".to_string(), |bot| format!("{} cells", bot.len())),
            snapshot.food
        );
        true
    }
}

/// Prints the whole board, top row first.
#[derive(Default)]
pub struct AsciiSink {
    pub presented: u64,
}

impl FrameSink for AsciiSink {
    fn present(&mut self, snapshot: &RenderSnapshot) -> bool {
        self.presented += 1;
        println!("{}", render_board(snapshot));
        true
    }
}

pub fn render_board(snapshot: &RenderSnapshot) -> String {
    let width = snapshot.grid.width as usize;
    let height = snapshot.grid.height as usize;
    let mut rows = vec![vec!['.'; width]; height];

    let mut put = |cell: &Point, mark: char| {
        rows[cell.y as usize][cell.x as usize] = mark;
    };
    for food in &snapshot.food {
        put(food, '*');
    }
    if let Some(bot) = &snapshot.bot {
        for (i, cell) in bot.iter().enumerate() {
            put(cell, if i == 0 { 'B' } else { 'b' });
        }
    }
    for (i, cell) in snapshot.player.iter().enumerate() {
        put(cell, if i == 0 { '@' } else { 'o' });
    }

    rows.iter()
        .rev()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
