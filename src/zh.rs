//! Traditional → Simplified Chinese conversion.
//!
//! Character-level substitution over a fixed table; unmapped characters pass
//! through unchanged. The direction is fixed, matching the corpus this tool
//! is built for (zh-Wikipedia dumps carry mixed-script source text).

use std::collections::HashMap;
use std::sync::LazyLock;

static T2S: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| T2S_TABLE.iter().copied().collect());

/// Convert Traditional characters to Simplified, leaving everything else as is.
pub fn t2s(text: &str) -> String {
    text.chars().map(|c| *T2S.get(&c).unwrap_or(&c)).collect()
}

/// One-to-one (traditional, simplified) pairs. Polyphonic characters whose
/// simplification depends on context (乾, 藉, 瞭, ...) are left out rather
/// than mapped wrong.
#[rustfmt::skip]
const T2S_TABLE: &[(char, char)] = &[
    ('萬','万'),('與','与'),('專','专'),('業','业'),('叢','丛'),('東','东'),('絲','丝'),('丟','丢'),
    ('兩','两'),('嚴','严'),('喪','丧'),('個','个'),('豐','丰'),('臨','临'),('為','为'),('爲','为'),
    ('麗','丽'),('舉','举'),('麼','么'),('義','义'),('烏','乌'),('樂','乐'),('喬','乔'),('習','习'),
    ('鄉','乡'),('書','书'),('買','买'),('亂','乱'),('爭','争'),('虧','亏'),('雲','云'),('亞','亚'),
    ('產','产'),('畝','亩'),('親','亲'),('億','亿'),('僅','仅'),('從','从'),('倉','仓'),('儀','仪'),
    ('們','们'),('價','价'),('眾','众'),('衆','众'),('優','优'),('夥','伙'),('會','会'),('傘','伞'),
    ('偉','伟'),('傳','传'),('傷','伤'),('倫','伦'),('偽','伪'),('體','体'),('傭','佣'),('俠','侠'),
    ('侶','侣'),('僥','侥'),('偵','侦'),('側','侧'),('僑','侨'),('儂','侬'),('儼','俨'),('倆','俩'),
    ('儷','俪'),('儉','俭'),('債','债'),('傾','倾'),('賃','赁'),('僕','仆'),('償','偿'),('儲','储'),
    ('兒','儿'),('兌','兑'),('黨','党'),('蘭','兰'),('關','关'),('興','兴'),('茲','兹'),('養','养'),
    ('獸','兽'),('內','内'),('岡','冈'),('冊','册'),('寫','写'),('軍','军'),('農','农'),('馮','冯'),
    ('衝','冲'),('沖','冲'),('決','决'),('況','况'),('凍','冻'),('淨','净'),('涼','凉'),('減','减'),
    ('湊','凑'),('凜','凛'),('幾','几'),('鳳','凤'),('憑','凭'),('凱','凯'),('擊','击'),('鑿','凿'),
    ('劃','划'),('劉','刘'),('則','则'),('剛','刚'),('創','创'),('刪','删'),('別','别'),('劊','刽'),
    ('劑','剂'),('剮','剐'),('劍','剑'),('剝','剥'),('劇','剧'),('剎','刹'),('勸','劝'),('辦','办'),
    ('務','务'),('動','动'),('勵','励'),('勁','劲'),('勞','劳'),('勢','势'),('勳','勋'),('勝','胜'),
    ('匯','汇'),('彙','汇'),('匱','匮'),('區','区'),('醫','医'),('華','华'),('協','协'),('單','单'),
    ('賣','卖'),('盧','卢'),('鹵','卤'),('滷','卤'),('臥','卧'),('衛','卫'),('卻','却'),('廠','厂'),
    ('廳','厅'),('曆','历'),('歷','历'),('厲','厉'),('壓','压'),('厭','厌'),('縣','县'),('參','参'),
    ('蔘','参'),('雙','双'),('發','发'),('髮','发'),('變','变'),('敘','叙'),('疊','叠'),('葉','叶'),
    ('號','号'),('嘆','叹'),('嘰','叽'),('籲','吁'),('後','后'),('嚇','吓'),('呂','吕'),('嗎','吗'),
    ('噸','吨'),('聽','听'),('啟','启'),('吳','吴'),('囈','呓'),('嘔','呕'),('唄','呗'),('員','员'),
    ('詠','咏'),('嚨','咙'),('嚀','咛'),('響','响'),('啞','哑'),('嘩','哗'),('喲','哟'),('喚','唤'),
    ('問','问'),('嗇','啬'),('噴','喷'),('嘖','啧'),('嘗','尝'),('嚐','尝'),('噓','嘘'),('嘯','啸'),
    ('嚕','噜'),('嚙','啮'),('嚥','咽'),('嚶','嘤'),('囂','嚣'),('囑','嘱'),('囉','啰'),('喫','吃'),
    ('唸','念'),('嚮','向'),('國','国'),('圍','围'),('園','园'),('圓','圆'),('圖','图'),('團','团'),
    ('壩','坝'),('墳','坟'),('壟','垄'),('壘','垒'),('墾','垦'),('執','执'),('堅','坚'),('堊','垩'),
    ('堯','尧'),('報','报'),('場','场'),('塊','块'),('塗','涂'),('塵','尘'),('塹','堑'),('墊','垫'),
    ('墜','坠'),('墮','堕'),('墻','墙'),('牆','墙'),('壇','坛'),('壞','坏'),('壯','壮'),('聲','声'),
    ('殼','壳'),('壺','壶'),('處','处'),('備','备'),('複','复'),('復','复'),('夠','够'),('夢','梦'),
    ('夾','夹'),('奪','夺'),('奮','奋'),('獎','奖'),('妝','妆'),('婦','妇'),('媽','妈'),('嫵','妩'),
    ('嫗','妪'),('姦','奸'),('娛','娱'),('婁','娄'),('婭','娅'),('嬈','娆'),('嬌','娇'),('媧','娲'),
    ('嫻','娴'),('嬋','婵'),('嬸','婶'),('嬪','嫔'),('嬰','婴'),('姪','侄'),('孫','孙'),('學','学'),
    ('孿','孪'),('寧','宁'),('寶','宝'),('實','实'),('寵','宠'),('審','审'),('憲','宪'),('宮','宫'),
    ('寬','宽'),('賓','宾'),('寢','寝'),('對','对'),('尋','寻'),('導','导'),('壽','寿'),('將','将'),
    ('爾','尔'),('尷','尴'),('屆','届'),('屍','尸'),('盡','尽'),('儘','尽'),('層','层'),('屬','属'),
    ('屢','屡'),('屨','屦'),('嶼','屿'),('歲','岁'),('豈','岂'),('嶇','岖'),('崗','岗'),('嵐','岚'),
    ('島','岛'),('嶺','岭'),('嶽','岳'),('峽','峡'),('崢','峥'),('巒','峦'),('嶗','崂'),('嶄','崭'),
    ('嶸','嵘'),('嶁','嵝'),('巔','巅'),('幣','币'),('帥','帅'),('師','师'),('帳','帐'),('簾','帘'),
    ('幟','帜'),('帶','带'),('幀','帧'),('幫','帮'),('幗','帼'),('冪','幂'),('幹','干'),('並','并'),
    ('廣','广'),('莊','庄'),('慶','庆'),('廬','庐'),('廡','庑'),('庫','库'),('應','应'),('廟','庙'),
    ('龐','庞'),('廢','废'),('開','开'),('異','异'),('棄','弃'),('張','张'),('彌','弥'),('彎','弯'),
    ('彈','弹'),('強','强'),('歸','归'),('當','当'),('錄','录'),('彥','彦'),('徹','彻'),('徑','径'),
    ('徠','徕'),('徵','征'),('禦','御'),('憶','忆'),('懺','忏'),('憂','忧'),('愾','忾'),('懷','怀'),
    ('態','态'),('慫','怂'),('憮','怃'),('慪','怄'),('悵','怅'),('愴','怆'),('憐','怜'),('總','总'),
    ('懟','怼'),('懌','怿'),('戀','恋'),('恆','恒'),('懇','恳'),('惡','恶'),('慟','恸'),('惻','恻'),
    ('惱','恼'),('惲','恽'),('懸','悬'),('慳','悭'),('憫','悯'),('驚','惊'),('懼','惧'),('慘','惨'),
    ('懲','惩'),('憊','惫'),('愜','惬'),('慚','惭'),('憚','惮'),('慣','惯'),('愛','爱'),('慮','虑'),
    ('慾','欲'),('憤','愤'),('憒','愦'),('懶','懒'),('懾','慑'),('戇','戆'),('戔','戋'),('戲','戏'),
    ('戧','戗'),('戰','战'),('戶','户'),('紮','扎'),('撲','扑'),('擴','扩'),('捫','扪'),('掃','扫'),
    ('揚','扬'),('擾','扰'),('撫','抚'),('拋','抛'),('摶','抟'),('摳','抠'),('掄','抡'),('搶','抢'),
    ('護','护'),('擔','担'),('擬','拟'),('攏','拢'),('揀','拣'),('擁','拥'),('攔','拦'),('擰','拧'),
    ('撥','拨'),('擇','择'),('掛','挂'),('摯','挚'),('攣','挛'),('挾','挟'),('撻','挞'),('捨','舍'),
    ('捲','卷'),('據','据'),('損','损'),('撿','捡'),('換','换'),('搗','捣'),('摑','掴'),('擲','掷'),
    ('撣','掸'),('摻','掺'),('摜','掼'),('攬','揽'),('撳','揿'),('攙','搀'),('擱','搁'),('摟','搂'),
    ('攪','搅'),('攜','携'),('搖','摇'),('擄','掳'),('攤','摊'),('攆','撵'),('撓','挠'),('擋','挡'),
    ('擯','摈'),('擠','挤'),('攝','摄'),('攢','攒'),('斂','敛'),('斃','毙'),('敗','败'),('敵','敌'),
    ('數','数'),('齋','斋'),('斕','斓'),('鬥','斗'),('斬','斩'),('斷','断'),('無','无'),('舊','旧'),
    ('時','时'),('曠','旷'),('暢','畅'),('曇','昙'),('晝','昼'),('顯','显'),('晉','晋'),('曬','晒'),
    ('曉','晓'),('曄','晔'),('暈','晕'),('暉','晖'),('曖','暧'),('朧','胧'),('術','术'),('樸','朴'),
    ('機','机'),('殺','杀'),('雜','杂'),('權','权'),('條','条'),('來','来'),('楊','杨'),('傑','杰'),
    ('極','极'),('構','构'),('樞','枢'),('棗','枣'),('櫪','枥'),('槍','枪'),('楓','枫'),('梟','枭'),
    ('櫃','柜'),('檸','柠'),('柵','栅'),('標','标'),('棧','栈'),('櫛','栉'),('櫳','栊'),('棟','栋'),
    ('樹','树'),('櫸','榉'),('檢','检'),('椏','桠'),('橈','桡'),('楨','桢'),('檔','档'),('桿','杆'),
    ('檜','桧'),('槳','桨'),('櫻','樱'),('欄','栏'),('樁','桩'),('樣','样'),('橢','椭'),('榮','荣'),
    ('槓','杠'),('樓','楼'),('欖','榄'),('營','营'),('檯','台'),('臺','台'),('颱','台'),('歡','欢'),
    ('歐','欧'),('歟','欤'),('歿','殁'),('殘','残'),('殞','殒'),('殮','殓'),('殫','殚'),('毆','殴'),
    ('毀','毁'),('轂','毂'),('畢','毕'),('氈','毡'),('氣','气'),('氫','氢'),('氬','氩'),('氳','氲'),
    ('漢','汉'),('汙','污'),('湯','汤'),('洶','汹'),('溝','沟'),('沒','没'),('滄','沧'),('滬','沪'),
    ('瀋','沈'),('淪','沦'),('漣','涟'),('渦','涡'),('淺','浅'),('漿','浆'),('澆','浇'),('濁','浊'),
    ('測','测'),('濟','济'),('瀏','浏'),('滸','浒'),('濃','浓'),('潯','浔'),('濤','涛'),('澇','涝'),
    ('淶','涞'),('漬','渍'),('澗','涧'),('潰','溃'),('灘','滩'),('濺','溅'),('滾','滚'),('滯','滞'),
    ('灑','洒'),('滿','满'),('濾','滤'),('濫','滥'),('灤','滦'),('濱','滨'),('潑','泼'),('澤','泽'),
    ('涇','泾'),('潔','洁'),('灣','湾'),('澱','淀'),('淵','渊'),('漁','渔'),('溫','温'),('遊','游'),
    ('濕','湿'),('漲','涨'),('燙','烫'),('澀','涩'),('濘','泞'),('瀝','沥'),('瀕','濒'),('瀘','泸'),
    ('瀧','泷'),('瀟','潇'),('瀾','澜'),('灝','灏'),('淚','泪'),('漸','渐'),('潤','润'),('滅','灭'),
    ('燈','灯'),('靈','灵'),('災','灾'),('燦','灿'),('煬','炀'),('爐','炉'),('燉','炖'),('煒','炜'),
    ('熗','炝'),('點','点'),('煉','炼'),('熾','炽'),('爍','烁'),('爛','烂'),('烴','烃'),('燭','烛'),
    ('煙','烟'),('煩','烦'),('燒','烧'),('燁','烨'),('燴','烩'),('熱','热'),('爺','爷'),('牘','牍'),
    ('牽','牵'),('犢','犊'),('狀','状'),('獷','犷'),('獁','犸'),('猶','犹'),('狽','狈'),('獨','独'),
    ('狹','狭'),('獅','狮'),('獪','狯'),('猙','狰'),('獄','狱'),('猻','狲'),('獵','猎'),('獰','狞'),
    ('獺','獭'),('獻','献'),('獲','获'),('穫','获'),('貓','猫'),('璣','玑'),('瑪','玛'),('瑋','玮'),
    ('環','环'),('現','现'),('璽','玺'),('琺','珐'),('瓏','珑'),('璫','珰'),('琿','珲'),('璉','琏'),
    ('瑣','琐'),('瑤','瑶'),('瓔','璎'),('璦','瑷'),('瓚','瓒'),('瓊','琼'),('甕','瓮'),('甦','苏'),
    ('電','电'),('畫','画'),('疇','畴'),('癤','疖'),('療','疗'),('瘧','疟'),('癘','疠'),('瘍','疡'),
    ('瘡','疮'),('瘋','疯'),('皰','疱'),('痙','痉'),('癢','痒'),('癆','痨'),('瘓','痪'),('癇','痫'),
    ('痺','痹'),('癉','瘅'),('瘺','瘘'),('癟','瘪'),('癱','瘫'),('癮','瘾'),('癬','癣'),('癲','癫'),
    ('癡','痴'),('皚','皑'),('皺','皱'),('盞','盏'),('鹽','盐'),('監','监'),('蓋','盖'),('盜','盗'),
    ('盤','盘'),('睜','睁'),('瞞','瞒'),('睏','困'),('礬','矾'),('礦','矿'),('碼','码'),('磚','砖'),
    ('硯','砚'),('礪','砺'),('礱','砻'),('礫','砾'),('礎','础'),('碩','硕'),('硤','硖'),('磽','硗'),
    ('確','确'),('鹼','碱'),('礙','碍'),('磧','碛'),('磯','矶'),('禮','礼'),('祿','禄'),('禍','祸'),
    ('禎','祯'),('禱','祷'),('禪','禅'),('祕','秘'),('離','离'),('秈','籼'),('種','种'),('積','积'),
    ('稱','称'),('穢','秽'),('穌','稣'),('稅','税'),('穩','稳'),('穡','穑'),('窮','穷'),('竊','窃'),
    ('竅','窍'),('窯','窑'),('竄','窜'),('窩','窝'),('窪','洼'),('窶','窭'),('豎','竖'),('競','竞'),
    ('筆','笔'),('筍','笋'),('箋','笺'),('籠','笼'),('築','筑'),('篤','笃'),('筧','笕'),('箏','筝'),
    ('籌','筹'),('簽','签'),('簡','简'),('簫','箫'),('簞','箪'),('籟','籁'),('籃','篮'),('籬','篱'),
    ('類','类'),('籮','箩'),('糴','籴'),('粵','粤'),('糞','粪'),('糧','粮'),('糲','粝'),('糶','粜'),
    ('紀','纪'),('約','约'),('紅','红'),('紂','纣'),('紇','纥'),('紈','纨'),('紉','纫'),('緯','纬'),
    ('紜','纭'),('純','纯'),('紕','纰'),('紗','纱'),('綱','纲'),('納','纳'),('縱','纵'),('綸','纶'),
    ('紛','纷'),('紙','纸'),('紋','纹'),('紡','纺'),('紐','纽'),('紓','纾'),('線','线'),('紺','绀'),
    ('練','练'),('組','组'),('紳','绅'),('細','细'),('織','织'),('終','终'),('縐','绉'),('絆','绊'),
    ('絀','绌'),('紹','绍'),('繹','绎'),('經','经'),('綁','绑'),('絨','绒'),('結','结'),('絝','绔'),
    ('繞','绕'),('繪','绘'),('給','给'),('絢','绚'),('絳','绛'),('絡','络'),('絕','绝'),('絞','绞'),
    ('統','统'),('綆','绠'),('綃','绡'),('絹','绢'),('繡','绣'),('綏','绥'),('絛','绦'),('繼','继'),
    ('績','绩'),('緒','绪'),('綾','绫'),('續','续'),('綺','绮'),('緋','绯'),('綽','绰'),('繩','绳'),
    ('維','维'),('綿','绵'),('綬','绶'),('繃','绷'),('綢','绸'),('綹','绺'),('綣','绻'),('綜','综'),
    ('綻','绽'),('綰','绾'),('綠','绿'),('綴','缀'),('緇','缁'),('緘','缄'),('緬','缅'),('緻','致'),
    ('纜','缆'),('緞','缎'),('緩','缓'),('締','缔'),('縷','缕'),('編','编'),('緡','缗'),('緣','缘'),
    ('縉','缙'),('縛','缚'),('縟','缛'),('縝','缜'),('縫','缝'),('縞','缟'),('纏','缠'),('縭','缡'),
    ('縊','缢'),('縑','缣'),('繽','缤'),('縹','缥'),('縵','缦'),('縲','缧'),('纓','缨'),('縮','缩'),
    ('繆','缪'),('繅','缫'),('纖','纤'),('纔','才'),('繚','缭'),('繒','缯'),('繳','缴'),('繾','缱'),
    ('緊','紧'),('縈','萦'),('繭','茧'),('缽','钵'),('罌','罂'),('罰','罚'),('罷','罢'),('羅','罗'),
    ('羆','罴'),('羈','羁'),('罵','骂'),('羨','羡'),('翹','翘'),('聳','耸'),('恥','耻'),('聶','聂'),
    ('聾','聋'),('職','职'),('聹','聍'),('聯','联'),('聵','聩'),('聰','聪'),('聖','圣'),('肅','肃'),
    ('腸','肠'),('膚','肤'),('腎','肾'),('腫','肿'),('脹','胀'),('脅','胁'),('膽','胆'),('臚','胪'),
    ('脛','胫'),('膠','胶'),('脈','脉'),('膾','脍'),('臍','脐'),('腦','脑'),('膿','脓'),('臠','脔'),
    ('腳','脚'),('脫','脱'),('臉','脸'),('臘','腊'),('膩','腻'),('騰','腾'),('臏','膑'),('臟','脏'),
    ('髒','脏'),('輿','舆'),('艙','舱'),('艦','舰'),('艱','艰'),('艷','艳'),('藝','艺'),('節','节'),
    ('薌','芗'),('蕪','芜'),('蘆','芦'),('葦','苇'),('莧','苋'),('蒼','苍'),('苧','苎'),('蘇','苏'),
    ('蘋','苹'),('莖','茎'),('蘢','茏'),('蔦','茑'),('塋','茔'),('煢','茕'),('荊','荆'),('薦','荐'),
    ('莢','荚'),('蕘','荛'),('蕎','荞'),('薈','荟'),('薺','荠'),('蕩','荡'),('葷','荤'),('滎','荥'),
    ('犖','荦'),('熒','荧'),('蕁','荨'),('藎','荩'),('蓀','荪'),('蔭','荫'),('藥','药'),('蒞','莅'),
    ('萊','莱'),('蓮','莲'),('蒔','莳'),('萵','莴'),('瑩','莹'),('鶯','莺'),('蓴','莼'),('蘿','萝'),
    ('螢','萤'),('蕭','萧'),('薩','萨'),('蔥','葱'),('蔣','蒋'),('藍','蓝'),('薊','蓟'),('蘚','藓'),
    ('藪','薮'),('蘊','蕴'),('薑','姜'),('虜','虏'),('虛','虚'),('蟲','虫'),('虯','虬'),('蝦','虾'),
    ('蟻','蚁'),('螞','蚂'),('蠶','蚕'),('蟈','蝈'),('蠔','蚝'),('蛺','蛱'),('蟯','蛲'),('螄','蛳'),
    ('蠐','蛴'),('蛻','蜕'),('蝸','蜗'),('蠟','蜡'),('蠅','蝇'),('蟬','蝉'),('蝕','蚀'),('螻','蝼'),
    ('蠣','蛎'),('蟶','蛏'),('蠻','蛮'),('蟄','蛰'),('釁','衅'),('銜','衔'),('補','补'),('襯','衬'),
    ('袞','衮'),('襖','袄'),('襪','袜'),('襲','袭'),('裝','装'),('襠','裆'),('褲','裤'),('製','制'),
    ('襤','褴'),('褻','亵'),('視','视'),('規','规'),('覓','觅'),('見','见'),('觀','观'),('覘','觇'),
    ('覺','觉'),('覽','览'),('覦','觎'),('覬','觊'),('覯','觏'),('覲','觐'),('覈','核'),('觴','觞'),
    ('觸','触'),('觶','觯'),('計','计'),('訂','订'),('訃','讣'),('認','认'),('譏','讥'),('訐','讦'),
    ('訌','讧'),('討','讨'),('讓','让'),('訕','讪'),('訖','讫'),('訓','训'),('議','议'),('訊','讯'),
    ('記','记'),('講','讲'),('諱','讳'),('謳','讴'),('詎','讵'),('訝','讶'),('訥','讷'),('許','许'),
    ('訛','讹'),('論','论'),('訟','讼'),('諷','讽'),('設','设'),('訪','访'),('訣','诀'),('證','证'),
    ('詁','诂'),('訶','诃'),('評','评'),('詛','诅'),('識','识'),('詐','诈'),('訴','诉'),('診','诊'),
    ('詆','诋'),('謅','诌'),('詞','词'),('詘','诎'),('詔','诏'),('譯','译'),('詒','诒'),('誆','诓'),
    ('誄','诔'),('試','试'),('詿','诖'),('詩','诗'),('詰','诘'),('詼','诙'),('誠','诚'),('誅','诛'),
    ('詵','诜'),('話','话'),('誕','诞'),('詬','诟'),('詮','诠'),('詭','诡'),('詢','询'),('詣','诣'),
    ('諍','诤'),('該','该'),('詳','详'),('詫','诧'),('諢','诨'),('詡','诩'),('譽','誉'),('誤','误'),
    ('誥','诰'),('誘','诱'),('誨','诲'),('誑','诳'),('說','说'),('誦','诵'),('誡','诫'),('誌','志'),
    ('語','语'),('誚','诮'),('誣','诬'),('誰','谁'),('課','课'),('誹','诽'),('誶','谇'),('調','调'),
    ('諂','谄'),('諒','谅'),('諄','谆'),('談','谈'),('誼','谊'),('謀','谋'),('諶','谌'),('諜','谍'),
    ('謊','谎'),('諫','谏'),('諧','谐'),('謔','谑'),('謁','谒'),('謂','谓'),('諤','谔'),('諭','谕'),
    ('諼','谖'),('讒','谗'),('諮','谘'),('諳','谙'),('諺','谚'),('諦','谛'),('謎','谜'),('諞','谝'),
    ('諛','谀'),('謗','谤'),('謙','谦'),('謐','谧'),('謄','誊'),('謠','谣'),('謝','谢'),('謖','谡'),
    ('謨','谟'),('謫','谪'),('謬','谬'),('譚','谭'),('譖','谮'),('譙','谯'),('譜','谱'),('譎','谲'),
    ('譴','谴'),('譫','谵'),('讖','谶'),('誇','夸'),('謹','谨'),('請','请'),('諸','诸'),('讀','读'),
    ('豬','猪'),('貝','贝'),('貞','贞'),('負','负'),('貢','贡'),('財','财'),('責','责'),('賢','贤'),
    ('賬','账'),('貨','货'),('質','质'),('販','贩'),('貪','贪'),('貧','贫'),('貶','贬'),('購','购'),
    ('貯','贮'),('貫','贯'),('貳','贰'),('賊','贼'),('貽','贻'),('賈','贾'),('賄','贿'),('貲','赀'),
    ('賂','赂'),('贊','赞'),('賅','赅'),('賑','赈'),('賞','赏'),('賜','赐'),('賠','赔'),('賡','赓'),
    ('賦','赋'),('賭','赌'),('贖','赎'),('賺','赚'),('賽','赛'),('賾','赜'),('贅','赘'),('贈','赠'),
    ('贍','赡'),('贏','赢'),('貴','贵'),('資','资'),('賀','贺'),('趙','赵'),('趕','赶'),('趨','趋'),
    ('躍','跃'),('蹌','跄'),('蹣','蹒'),('躊','踌'),('躋','跻'),('踐','践'),('躑','踯'),('蹺','跷'),
    ('蹤','踪'),('躓','踬'),('躡','蹑'),('蹕','跸'),('躪','躏'),('踴','踊'),('軀','躯'),('車','车'),
    ('軋','轧'),('軌','轨'),('軒','轩'),('軔','轫'),('轉','转'),('軛','轭'),('輪','轮'),('軟','软'),
    ('轟','轰'),('軻','轲'),('轎','轿'),('軸','轴'),('軼','轶'),('輕','轻'),('軫','轸'),('轆','辘'),
    ('載','载'),('軾','轼'),('較','较'),('輒','辄'),('輔','辅'),('輛','辆'),('輦','辇'),('輩','辈'),
    ('輝','辉'),('輥','辊'),('輞','辋'),('輟','辍'),('輜','辎'),('輳','辏'),('輻','辐'),('輯','辑'),
    ('輸','输'),('轡','辔'),('轅','辕'),('轄','辖'),('輾','辗'),('轍','辙'),('辭','辞'),('辮','辫'),
    ('辯','辩'),('邊','边'),('遼','辽'),('達','达'),('遷','迁'),('過','过'),('邁','迈'),('運','运'),
    ('還','还'),('這','这'),('進','进'),('遠','远'),('違','违'),('連','连'),('遲','迟'),('邇','迩'),
    ('逕','迳'),('跡','迹'),('蹟','迹'),('適','适'),('選','选'),('遜','逊'),('遞','递'),('邏','逻'),
    ('遺','遗'),('遙','遥'),('鄧','邓'),('鄺','邝'),('鄔','邬'),('郵','邮'),('鄒','邹'),('鄴','邺'),
    ('鄰','邻'),('鬱','郁'),('郟','郏'),('鄭','郑'),('鄆','郓'),('酈','郦'),('鄖','郧'),('鄲','郸'),
    ('醞','酝'),('醬','酱'),('釀','酿'),('釋','释'),('醜','丑'),('裏','里'),('裡','里'),('釐','厘'),
    ('鑒','鉴'),('鑑','鉴'),('鑾','銮'),('鏨','錾'),('針','针'),('釘','钉'),('釗','钊'),('釷','钍'),
    ('釧','钏'),('釩','钒'),('釣','钓'),('釵','钗'),('鈣','钙'),('鈦','钛'),('鈍','钝'),('鈔','钞'),
    ('鍾','钟'),('鐘','钟'),('鈉','钠'),('鋇','钡'),('鋼','钢'),('鑰','钥'),('欽','钦'),('鈞','钧'),
    ('鎢','钨'),('鉤','钩'),('鈕','钮'),('鈀','钯'),('鈺','钰'),('錢','钱'),('鉗','钳'),('鈷','钴'),
    ('鈸','钹'),('鉞','钺'),('鑽','钻'),('鉬','钼'),('鉭','钽'),('鉀','钾'),('鈿','钿'),('鈾','铀'),
    ('鐵','铁'),('鉑','铂'),('鈴','铃'),('鉛','铅'),('鉚','铆'),('鉍','铋'),('鈹','铍'),('鐸','铎'),
    ('銬','铐'),('銠','铑'),('鉺','铒'),('鋁','铝'),('銅','铜'),('銦','铟'),('鎧','铠'),('鑄','铸'),
    ('銖','铢'),('銑','铣'),('鋌','铤'),('銓','铨'),('鎩','铩'),('鉻','铬'),('銘','铭'),('錚','铮'),
    ('銫','铯'),('鉸','铰'),('銥','铱'),('鏟','铲'),('銃','铳'),('鐃','铙'),('銨','铵'),('銀','银'),
    ('鋪','铺'),('鏈','链'),('鏗','铿'),('銷','销'),('鎖','锁'),('鋰','锂'),('鋤','锄'),('鍋','锅'),
    ('鋯','锆'),('鋨','锇'),('銹','锈'),('銼','锉'),('鋒','锋'),('鋅','锌'),('鐧','锏'),('銳','锐'),
    ('銻','锑'),('鍺','锗'),('錯','错'),('錨','锚'),('錕','锟'),('錫','锡'),('錮','锢'),('鑼','锣'),
    ('錘','锤'),('錐','锥'),('錦','锦'),('鍁','锨'),('錠','锭'),('鍵','键'),('鋸','锯'),('錳','锰'),
    ('錙','锱'),('鍘','铡'),('鍔','锷'),('鍬','锹'),('鍛','锻'),('鍶','锶'),('鍍','镀'),('鎂','镁'),
    ('鏤','镂'),('鎊','镑'),('鎮','镇'),('鎘','镉'),('鑷','镊'),('鎬','镐'),('鎰','镒'),('鎵','镓'),
    ('鎔','镕'),('鏢','镖'),('鏍','镙'),('鏡','镜'),('鏃','镞'),('鐐','镣'),('鐙','镫'),('鑊','镬'),
    ('鐳','镭'),('鐲','镯'),('鐮','镰'),('鑲','镶'),('錶','表'),('鍼','针'),('長','长'),('門','门'),
    ('閂','闩'),('閃','闪'),('閆','闫'),('閉','闭'),('闖','闯'),('閏','闰'),('闈','闱'),('閑','闲'),
    ('閎','闳'),('間','间'),('閔','闵'),('悶','闷'),('閘','闸'),('鬧','闹'),('閨','闺'),('聞','闻'),
    ('闥','闼'),('閩','闽'),('閭','闾'),('閥','阀'),('閣','阁'),('閡','阂'),('閫','阃'),('閱','阅'),
    ('閬','阆'),('鬩','阋'),('閾','阈'),('閹','阉'),('閶','阊'),('閻','阎'),('閽','阍'),('闌','阑'),
    ('闃','阒'),('闊','阔'),('闋','阕'),('闔','阖'),('闐','阗'),('闕','阙'),('闡','阐'),('闞','阚'),
    ('闆','板'),('隊','队'),('陽','阳'),('陰','阴'),('陣','阵'),('階','阶'),('際','际'),('陸','陆'),
    ('隴','陇'),('陳','陈'),('陝','陕'),('隕','陨'),('險','险'),('隨','随'),('隱','隐'),('隸','隶'),
    ('雋','隽'),('難','难'),('雛','雏'),('靂','雳'),('霧','雾'),('霽','霁'),('黴','霉'),('靄','霭'),
    ('靚','靓'),('靜','静'),('靨','靥'),('韃','鞑'),('韋','韦'),('韌','韧'),('韓','韩'),('韜','韬'),
    ('韻','韵'),('頁','页'),('頂','顶'),('頃','顷'),('項','项'),('順','顺'),('須','须'),('頊','顼'),
    ('頑','顽'),('顧','顾'),('頓','顿'),('頎','颀'),('頒','颁'),('頌','颂'),('預','预'),('顱','颅'),
    ('領','领'),('頗','颇'),('頸','颈'),('頡','颉'),('頰','颊'),('頜','颌'),('潁','颍'),('頤','颐'),
    ('頻','频'),('頹','颓'),('頷','颔'),('穎','颖'),('顆','颗'),('題','题'),('顎','颚'),('顓','颛'),
    ('顏','颜'),('額','额'),('顳','颞'),('顛','颠'),('顥','颢'),('顫','颤'),('顰','颦'),('顴','颧'),
    ('風','风'),('颯','飒'),('颶','飓'),('颼','飕'),('飄','飘'),('飆','飙'),('飛','飞'),('飢','饥'),
    ('饑','饥'),('飩','饨'),('飪','饪'),('飭','饬'),('飯','饭'),('飲','饮'),('餞','饯'),('飾','饰'),
    ('飽','饱'),('飼','饲'),('飴','饴'),('餌','饵'),('饒','饶'),('餉','饷'),('餃','饺'),('餅','饼'),
    ('餓','饿'),('餘','余'),('餒','馁'),('餛','馄'),('餡','馅'),('館','馆'),('餿','馊'),('饃','馍'),
    ('餾','馏'),('饈','馐'),('饉','馑'),('饅','馒'),('饋','馈'),('饌','馔'),('餵','喂'),('馬','马'),
    ('馭','驭'),('馱','驮'),('馴','驯'),('馳','驰'),('驅','驱'),('駁','驳'),('駛','驶'),('駝','驼'),
    ('駐','驻'),('駟','驷'),('駙','驸'),('駒','驹'),('駑','驽'),('駕','驾'),('驍','骁'),('駭','骇'),
    ('駢','骈'),('驕','骄'),('驊','骅'),('駱','骆'),('驪','骊'),('騁','骋'),('駿','骏'),('騏','骐'),
    ('騎','骑'),('騙','骗'),('騖','骛'),('騫','骞'),('騷','骚'),('騸','骟'),('騾','骡'),('驀','蓦'),
    ('驁','骜'),('驛','驿'),('驗','验'),('驟','骤'),('驢','驴'),('驥','骥'),('髏','髅'),('髖','髋'),
    ('髕','髌'),('鬢','鬓'),('鬆','松'),('鬍','胡'),('魘','魇'),('魎','魉'),('魚','鱼'),('魷','鱿'),
    ('魯','鲁'),('魴','鲂'),('鯰','鲶'),('鱸','鲈'),('鮒','鲋'),('鮑','鲍'),('鮭','鲑'),('鮪','鲔'),
    ('鮫','鲛'),('鮮','鲜'),('鱘','鲟'),('鯽','鲫'),('鯀','鲧'),('鯉','鲤'),('鯁','鲠'),('鯊','鲨'),
    ('鯔','鲻'),('鯡','鲱'),('鯤','鲲'),('鯧','鲳'),('鯢','鲵'),('鯛','鲷'),('鯨','鲸'),('鰓','鳃'),
    ('鰍','鳅'),('鰈','鲽'),('鯿','鳊'),('鰭','鳍'),('鰥','鳏'),('鰩','鳐'),('鰻','鳗'),('鰱','鲢'),
    ('鰾','鳔'),('鱈','鳕'),('鱉','鳖'),('鱔','鳝'),('鱗','鳞'),('鱖','鳜'),('鱒','鳟'),('鱷','鳄'),
    ('鳥','鸟'),('鳩','鸠'),('雞','鸡'),('鳶','鸢'),('鳴','鸣'),('鷗','鸥'),('鴉','鸦'),('鴇','鸨'),
    ('鴆','鸩'),('鴣','鸪'),('鶇','鸫'),('鸕','鸬'),('鴨','鸭'),('鴞','鸮'),('鴦','鸯'),('鴟','鸱'),
    ('鴛','鸳'),('鴕','鸵'),('鷥','鸶'),('鷙','鸷'),('鴯','鸸'),('鴿','鸽'),('鸞','鸾'),('鴻','鸿'),
    ('鸝','鹂'),('鵑','鹃'),('鵠','鹄'),('鵝','鹅'),('鵜','鹈'),('鵡','鹉'),('鵲','鹊'),('鵪','鹌'),
    ('鵬','鹏'),('鶉','鹑'),('鶩','鹜'),('鷂','鹞'),('鶴','鹤'),('鷺','鹭'),('鷹','鹰'),('鹹','咸'),
    ('麥','麦'),('麩','麸'),('麵','面'),('黃','黄'),('黷','黩'),('黿','鼋'),('鼉','鼍'),('鼴','鼹'),
    ('齊','齐'),('齒','齿'),('齔','龀'),('齟','龃'),('齡','龄'),('齙','龅'),('齜','龇'),('齦','龈'),
    ('齬','龉'),('齪','龊'),('齲','龋'),('齷','龌'),('齣','出'),('龔','龚'),('龕','龛'),('龜','龟'),
    ('頭','头'),('雖','虽'),('願','愿'),('係','系'),('傢','家'),('倖','幸'),('僱','雇'),('兇','凶'),
    ('準','准'),('佈','布'),('盃','杯'),('檻','槛'),('牀','床'),('週','周'),('鞦','秋'),('韆','千'),
    ('竈','灶'),('隻','只'),('讎','雠'),('靉','叆'),('顙','颡'),('驂','骖'),('讕','谰'),('讚','赞'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words() {
        assert_eq!(t2s("漢語"), "汉语");
        assert_eq!(t2s("簡體中文"), "简体中文");
        assert_eq!(t2s("維基百科"), "维基百科");
        assert_eq!(t2s("測試條目"), "测试条目");
    }

    #[test]
    fn simplified_passes_through() {
        assert_eq!(t2s("已经是简体"), "已经是简体");
    }

    #[test]
    fn non_chinese_untouched() {
        assert_eq!(t2s("Rust 1.85, 2026!"), "Rust 1.85, 2026!");
    }

    #[test]
    fn mixed_script() {
        assert_eq!(t2s("上海是中華人民共和國的直轄市"), "上海是中华人民共和国的直辖市");
    }

    #[test]
    fn table_has_no_identity_pairs() {
        for (t, s) in T2S_TABLE {
            assert_ne!(t, s, "identity mapping for {}", t);
        }
    }
}
