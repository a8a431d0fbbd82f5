//! Built-in transliteration tables.
//!
//! Terms are applied in declaration order. Some short terms appear before
//! longer terms that contain them (`正常` before `不正常`, `摄影` before
//! `摄影法`); with the default order the longer term never matches. Set
//! `order = "longest-first"` to avoid that.

use std::collections::BTreeMap;

/// Photography vocabulary used in lesson and gallery file names.
const TERMS: &[(&str, &str)] = &[
    // lessons
    ("第一课", "lesson-01"),
    ("第二课", "lesson-02"),
    ("第三课", "lesson-03"),
    ("第四课", "lesson-04"),
    ("第五课", "lesson-05"),
    ("第六课", "lesson-06"),
    ("第七课", "lesson-07"),
    ("第八课", "lesson-08"),
    // photography
    ("摄影", "photography"),
    ("相机", "camera"),
    ("镜头", "lens"),
    ("构图", "composition"),
    ("曝光", "exposure"),
    ("用光", "lighting"),
    ("色彩", "color"),
    ("作品", "work"),
    ("效果", "effect"),
    ("拍摄", "shooting"),
    // equipment and technique
    ("数码", "digital"),
    ("单反", "slr"),
    ("微距", "macro"),
    ("鱼眼", "fisheye"),
    ("广角", "wide-angle"),
    ("长焦", "telephoto"),
    ("移轴", "tilt-shift"),
    ("折返", "reflex"),
    ("光圈", "aperture"),
    ("快门", "shutter"),
    ("感光度", "iso"),
    ("景深", "depth-of-field"),
    ("对焦", "focus"),
    ("测光", "metering"),
    ("白平衡", "white-balance"),
    // composition
    ("三分法", "rule-of-thirds"),
    ("对角线", "diagonal"),
    ("三角形", "triangle"),
    ("框式", "frame"),
    ("对称", "symmetry"),
    ("引导线", "leading-lines"),
    ("居中", "center"),
    ("透视", "perspective"),
    ("线条", "lines"),
    ("虚实", "depth"),
    ("明暗", "light-dark"),
    ("大小", "size"),
    ("奇数", "odd-number"),
    // places and scenes
    ("博贺港", "bohe-port"),
    ("水东湾", "shuidong-bay"),
    ("梅城", "meicheng"),
    ("彩虹", "rainbow"),
    ("晚霞", "sunset"),
    ("日出", "sunrise"),
    ("海边", "seaside"),
    ("渔夫", "fisherman"),
    ("渔港", "fishing-port"),
    ("海湾", "bay"),
    ("海滩", "beach"),
    ("白鹭", "egret"),
    ("觅食", "foraging"),
    // culture
    ("舞狮", "lion-dance"),
    ("开渔节", "fishing-festival"),
    ("庙", "temple"),
    ("妆容", "makeup"),
    ("旦角", "female-role"),
    ("巡游", "parade"),
    // general
    ("世界", "world"),
    ("第一", "first"),
    ("照片", "photo"),
    ("原理", "principle"),
    ("基础", "basic"),
    ("发展", "development"),
    ("历史", "history"),
    ("现代", "modern"),
    ("范畴", "scope"),
    ("附件", "accessories"),
    ("设置", "settings"),
    ("功能", "function"),
    ("各种", "various"),
    ("种类", "types"),
    ("传感器", "sensor"),
    ("尺寸", "size"),
    ("机型", "model"),
    ("论述", "theory"),
    ("示意图", "diagram"),
    ("高速", "high-speed"),
    ("慢速", "slow-speed"),
    ("多重", "multiple"),
    ("追踪", "tracking"),
    ("对比", "contrast"),
    ("正常", "normal"),
    ("速度", "speed"),
    ("放大", "enlarged"),
    ("图例", "example"),
    ("模式", "mode"),
    ("内容", "content"),
    ("说明", "description"),
    ("立", "immediate"),
    ("不正常", "abnormal"),
    ("补偿", "compensation"),
    ("白加", "white-plus"),
    ("黑减", "black-minus"),
    ("清晰", "clear"),
    ("区域", "area"),
    ("关系", "relationship"),
    ("适合", "suitable"),
    ("对象", "subject"),
    ("单次", "single"),
    ("伺服", "servo"),
    ("连续", "continuous"),
    ("手动", "manual"),
    ("复杂", "complex"),
    ("环境", "environment"),
    ("位置", "position"),
    ("认识", "understanding"),
    ("太阳", "sun"),
    ("天空", "sky"),
    ("地景", "landscape"),
    ("面部", "face"),
    ("平价", "average"),
    ("中央", "center"),
    ("重点", "weighted"),
    ("点", "spot"),
    ("解说", "explanation"),
    ("色温", "color-temperature"),
    ("表", "chart"),
    ("两种", "two-types"),
    ("原图", "original"),
    ("睛天", "sunny"),
    ("阴天", "cloudy"),
    ("技巧", "techniques"),
    ("理论", "theory"),
    ("形式", "form"),
    ("九宫格", "grid"),
    ("花絮", "behind-scenes"),
    ("全景", "panorama"),
    ("人像", "portrait"),
    ("中景", "medium-shot"),
    ("近景", "close-up"),
    ("特写", "close-up-detail"),
    ("俯拍", "overhead"),
    ("平拍", "eye-level"),
    ("仰拍", "low-angle"),
    ("横", "horizontal"),
    ("竖", "vertical"),
    ("画幅", "format"),
    ("方", "square"),
    ("长轴", "long-axis"),
    ("注意事项", "notes"),
    ("案例", "case-study"),
    ("资料", "material"),
    ("艺术", "art"),
    ("要素", "elements"),
    ("强度", "intensity"),
    ("质量", "quality"),
    ("方向", "direction"),
    ("顺光", "front-light"),
    ("侧光", "side-light"),
    ("逆光", "back-light"),
    ("侧逆光", "side-back-light"),
    ("冷暖", "warm-cool"),
    ("室内", "indoor"),
    ("布光", "lighting-setup"),
    ("伦勃朗光", "rembrandt-light"),
    ("蝴蝶光", "butterfly-light"),
    ("三原色", "primary-colors"),
    ("色环", "color-wheel"),
    ("色调", "tone"),
    ("平衡", "balance"),
    ("互补", "complementary"),
    ("有色彩", "colored"),
    ("无色彩", "colorless"),
    ("花色", "patterned"),
    ("纯色", "solid-color"),
    ("面积", "area"),
    ("聚焦", "focus"),
    ("法则", "rule"),
    ("同频", "same-frequency"),
    ("六大", "six-major"),
    ("基本", "basic"),
    ("色相", "hue"),
    ("属性", "properties"),
    ("意义", "meaning"),
    ("七大", "seven-major"),
    ("正面", "positive"),
    ("负面", "negative"),
    ("感受", "feeling"),
    ("纯", "pure"),
    ("明", "bright"),
    ("淡", "light"),
    ("灰", "gray"),
    ("暗", "dark"),
    ("白", "white"),
    ("黑", "black"),
    // film cameras and attachments
    ("胶片", "film"),
    ("旁轴", "rangefinder"),
    ("傻瓜", "point-shoot"),
    ("湿板", "wet-plate"),
    ("摄影法", "photography"),
    ("操作", "operation"),
    ("过程", "process"),
    ("湿版", "wet-plate"),
];

/// Whole names mapped directly.
const EXACT: &[(&str, &str)] = &[
    (
        "各种胶片单反相机（附件1）",
        "various-film-slr-cameras-attachment1",
    ),
    (
        "旁轴和傻瓜胶片相机（附件2）",
        "rangefinder-point-shoot-cameras-attachment2",
    ),
    (
        "湿板摄影法的操作过程（附件3）",
        "wet-plate-photography-process-attachment3",
    ),
    ("数码相机", "digital-cameras"),
    ("湿版摄影法.mp4", "wet-plate-photography.mp4"),
    (
        "Screenshot_20200202-213218.webp",
        "screenshot-20200202-213218.webp",
    ),
];

/// Built-in dictionary terms, in application order.
pub fn terms() -> Vec<(String, String)> {
    TERMS
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Built-in whole-name table.
pub fn exact() -> BTreeMap<String, String> {
    EXACT
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
