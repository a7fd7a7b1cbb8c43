//! Text rendering of charts and readings

use std::fmt::Write;

use crate::domain::entities::{FourPillarsChart, HexagramResult};

/// Render a birth chart as a plain-text block
pub fn format_bazi(chart: &FourPillarsChart) -> String {
    let bazi = &chart.bazi;
    let mut out = String::from("【八字信息】\n");
    let _ = writeln!(out, "公历生日：{}", chart.solar_date);
    let _ = writeln!(out, "农历生日：{}", chart.lunar_date);
    let _ = writeln!(out, "年柱：{}", bazi.year_pillar);
    let _ = writeln!(out, "月柱：{}", bazi.month_pillar);
    let _ = writeln!(out, "日柱：{}", bazi.day_pillar);
    let _ = writeln!(out, "时柱：{}", bazi.hour_pillar);
    let _ = writeln!(out, "八字：{}", chart.full_bazi);
    out
}

/// Render a reading as a plain-text block, lines listed top to bottom
pub fn format_hexagram(result: &HexagramResult) -> String {
    let main = &result.main_hexagram;
    let changed = &result.changed_hexagram;

    let mut out = String::from("【六爻卦象】\n\n");
    let _ = writeln!(out, "主卦：{}", main.name);
    let _ = writeln!(
        out,
        "上卦：{}{}（{}）",
        main.upper_trigram.name, main.upper_trigram.symbol, main.upper_trigram.nature
    );
    let _ = writeln!(
        out,
        "下卦：{}{}（{}）\n",
        main.lower_trigram.name, main.lower_trigram.symbol, main.lower_trigram.nature
    );
    let _ = writeln!(out, "卦象：\n{}\n", main.symbol);

    out.push_str("爻线详情：\n");
    for line in result.lines.iter().rev() {
        let marker = if line.is_changing { " (变)" } else { "" };
        let _ = writeln!(out, "{}：{}{}", line.name, line.kind, marker);
    }

    if result.changing_lines.is_empty() {
        out.push_str("\n无变爻，以主卦论断\n");
    } else {
        let positions: Vec<String> = result
            .changing_lines
            .iter()
            .map(|p| p.to_string())
            .collect();
        let _ = writeln!(out, "\n变爻：第{}爻", positions.join("、"));
        let _ = writeln!(out, "变卦：{}", changed.name);
        let _ = writeln!(
            out,
            "变卦上卦：{}（{}）",
            changed.upper_trigram.name, changed.upper_trigram.nature
        );
        let _ = writeln!(
            out,
            "变卦下卦：{}（{}）",
            changed.lower_trigram.name, changed.lower_trigram.nature
        );
    }

    let _ = writeln!(
        out,
        "\n生成时间：{}",
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out
}
