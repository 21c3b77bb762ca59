//! Simplified Chinese (zh-CN)

use super::keys::{
    CommonTexts, FormTexts, HelpTexts, HintTexts, StatusTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "客户表单",
        theme_dark: "深色",
        theme_light: "浅色",
    },

    form: FormTexts {
        title: "客户信息",
        surname: "姓",
        name: "名",
        address: "地址",
        telephone: "电话",
        surname_placeholder: "姓...",
        name_placeholder: "名...",
        address_placeholder: "地址...",
        telephone_placeholder: "电话...",
        clear: "清空",
        submit: "提交",
        update: "更新",
        required_error: "姓和名为必填项！",
        not_found_error: "记录不存在：",
        editing: "正在编辑 #",
    },

    table: TableTexts {
        title: "客户",
        caption: "客户列表。",
        empty: "暂无客户。",
        id: "ID",
        surname: "姓",
        name: "名",
        address: "地址",
        telephone: "电话",
    },

    status: StatusTexts {
        created: "已创建客户 #",
        updated: "已更新客户 #",
        update_skipped: "客户已被删除，未更新：#",
        deleted: "已删除客户 #",
        editing: "正在编辑客户 #",
        cleared: "表单已清空",
        no_selection: "未选择客户",
        theme_changed: "主题：",
        language_changed: "语言：",
        config_save_failed: "无法保存设置：",
    },

    hints: HintTexts {
        next_field: "下一项",
        submit: "提交",
        clear: "清空",
        switch_panel: "切换面板",
        select: "选择",
        edit: "编辑",
        delete: "删除",
        help: "帮助",
        quit: "退出",
        close: "关闭",
    },

    help: HelpTexts {
        title: "快捷键",
        form_section: "表单",
        table_section: "客户列表",
        global_section: "全局",
        form_bindings: &[
            ("Tab / ↓", "下一项"),
            ("Shift+Tab / ↑", "上一项"),
            ("Enter", "提交，或按下当前按钮"),
            ("Alt+s", "提交"),
            ("Alt+c", "清空表单"),
            ("Backspace", "删除最后一个字符"),
        ],
        table_bindings: &[
            ("↑↓ / j k", "选择客户"),
            ("Home / End", "第一个 / 最后一个"),
            ("Enter / e", "编辑客户"),
            ("Del / d", "删除客户"),
            ("Tab", "返回表单"),
        ],
        global_bindings: &[
            ("Esc", "切换面板"),
            ("F1", "帮助"),
            ("F2", "切换主题"),
            ("F3", "切换语言"),
            ("Alt+q / Ctrl+C", "退出"),
        ],
    },
};
