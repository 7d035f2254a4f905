use criterion::{Criterion, criterion_group, criterion_main};
use scriptweaver_engine::{ConvertOptions, ScenarioConverter, ValidationConfig};

fn generate_scenario(sections: usize) -> String {
    let base = "\
1. 導入

探索者たちは森の館に招かれる。【目星】に成功すると『古びた日記』を見つける。

1-1. 館の様子

執事は言った。「ようこそ、お待ちしておりました」

| 部屋 | 内容 | 判定 |
|---|---|---|
| 書斎 | 日記 | 【図書館】 |
| 地下 | 祭壇 | SANc1/1d6 |

◆館：森の奥の洋館
◆執事：館の主に仕える

執事 (STR 10 CON 12 SIZ 13 INT 14 POW 11 DEX 9 HP 13)
技能: 【聞き耳】60% 【心理学】50%
噛みつき 1d4+1

===

";
    base.repeat(sections)
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(20);

    let content = generate_scenario(50);
    let plain = ScenarioConverter::new(ConvertOptions::default()).unwrap();
    let validating = ScenarioConverter::new(ConvertOptions {
        validation: Some(ValidationConfig::default()),
        ..Default::default()
    })
    .unwrap();

    group.bench_function("render", |b| {
        b.iter(|| {
            let html = plain.convert_text(std::hint::black_box(&content), false).unwrap();
            std::hint::black_box(html);
        });
    });

    group.bench_function("validate", |b| {
        b.iter(|| {
            let report = validating.validate_text(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(report);
        });
    });

    group.bench_function("render_with_report", |b| {
        b.iter(|| {
            let html = validating
                .convert_text(std::hint::black_box(&content), true)
                .unwrap();
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
